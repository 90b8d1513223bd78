//! FX payloads: quote request and exchange-rate response.

// self
use crate::_prelude::*;

/// Body for requesting an FX quote or executing an exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FxBody {
	/// Source currency code.
	pub from: String,
	/// Target currency code.
	pub to: String,
	/// Amount in the source currency.
	pub amount: f64,
}

/// One side of an FX quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FromOrTo {
	/// Amount in this side's currency.
	pub amount: f64,
	/// Currency code.
	pub currency: String,
}

/// FX quote returned by the rate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateResponse {
	/// Source side of the quote.
	pub from: FromOrTo,
	/// Applied conversion rate.
	pub rate: f64,
	/// Target side of the quote.
	pub to: FromOrTo,
}
