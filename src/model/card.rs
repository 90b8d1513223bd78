//! Card payloads: card model, issuance/funding bodies, and card transactions.

// self
use crate::{_prelude::*, model::ValidationError};

/// Virtual card returned by the card endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardModel {
	/// Card identifier.
	pub id: String,
	/// Cardholder name.
	pub name_on_card: String,
	/// Full card number.
	pub card_number: String,
	/// Masked PAN for display.
	pub masked_pan: String,
	/// Card verification value.
	pub cvv: String,
	/// Expiry in `MM/YY` form.
	pub expiry: String,
	/// Issuing network label.
	pub issuer: String,
	/// Card currency.
	pub currency: String,
	/// Card type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Lifecycle status label.
	pub status: String,
	/// Whether the card is frozen.
	pub freeze: bool,
	/// Current balance.
	pub balance: f64,
	/// Lifetime funded amount.
	pub total_funded: f64,
	/// Billing street address.
	pub address_street: String,
	/// Billing city.
	pub address_city: String,
	/// Billing state.
	pub address_state: String,
	/// Billing country.
	pub address_country: String,
	/// Billing postal code.
	pub address_postal_code: String,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Card product tiers accepted at issuance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
	/// Lite card without a bound customer.
	#[serde(rename = "LITE")]
	Lite,
	/// Corporate card (wire spelling kept as the API defines it).
	#[serde(rename = "COOPERATE")]
	Cooperate,
	/// Default card product.
	#[default]
	#[serde(rename = "DEFAULT")]
	Default,
}

/// Card networks accepted at issuance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardIssuer {
	/// Mastercard.
	#[serde(rename = "MASTERCARD")]
	Mastercard,
	/// Visa.
	#[serde(rename = "VISA")]
	Visa,
}

/// Body for issuing a card.
///
/// `customer_id` is mandatory for every type except [`CardType::Lite`];
/// [`validate`](Self::validate) enforces this before dispatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCardBody {
	/// Initial funding amount.
	pub amount: u64,
	/// Card product tier.
	#[serde(rename = "type", default)]
	pub kind: CardType,
	/// Card network.
	pub issuer: CardIssuer,
	/// Customer to bind the card to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<String>,
	/// Card currency.
	#[serde(default = "default_card_currency")]
	pub currency: String,
	/// Cardholder name override.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name_on_card: Option<String>,
}
impl CreateCardBody {
	/// Creates a default-tier issuance body for the provided amount and network.
	pub fn new(amount: u64, issuer: CardIssuer) -> Self {
		Self {
			amount,
			kind: CardType::default(),
			issuer,
			customer_id: None,
			currency: default_card_currency(),
			name_on_card: None,
		}
	}

	/// Checks the customer binding rule.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.kind != CardType::Lite && self.customer_id.is_none() {
			return Err(ValidationError::MissingCustomerId);
		}

		Ok(())
	}
}

/// Acknowledgement returned when a card is issued.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCardResponse {
	/// Identifier of the issued card.
	pub card_id: String,
	/// Human-readable outcome description.
	pub message: String,
}

/// Body for funding or withdrawing from a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundOrWithdrawCardBody {
	/// Amount to move.
	pub amount: u64,
}

/// Transaction recorded against a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
	/// Transaction identifier.
	pub id: String,
	/// Transaction amount.
	pub amount: f64,
	/// Transaction currency.
	pub currency: String,
	/// Merchant name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub merchant_name: Option<String>,
	/// Merchant city.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub merchant_city: Option<String>,
	/// Merchant country.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub merchant_country: Option<String>,
	/// Fees charged for the transaction.
	#[serde(default)]
	pub charges: f64,
	/// Transaction reference.
	pub reference: String,
	/// Lifecycle status label.
	pub status: String,
	/// Transaction type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

fn default_card_currency() -> String {
	"USD".into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn non_lite_cards_require_a_customer() {
		let body = CreateCardBody::new(500, CardIssuer::Visa);

		assert_eq!(body.validate(), Err(ValidationError::MissingCustomerId));

		let body =
			CreateCardBody { customer_id: Some("cus_1".into()), ..CreateCardBody::new(500, CardIssuer::Visa) };

		body.validate().expect("A bound default card should validate.");
	}

	#[test]
	fn lite_cards_do_not_require_a_customer() {
		let body = CreateCardBody { kind: CardType::Lite, ..CreateCardBody::new(100, CardIssuer::Mastercard) };

		body.validate().expect("A lite card without a customer should validate.");
	}

	#[test]
	fn issuance_body_serializes_with_wire_labels_and_defaults() {
		let body = CreateCardBody {
			customer_id: Some("cus_1".into()),
			..CreateCardBody::new(500, CardIssuer::Mastercard)
		};
		let value = serde_json::to_value(&body).expect("Body should serialize.");

		assert_eq!(
			value,
			serde_json::json!({
				"amount": 500,
				"type": "DEFAULT",
				"issuer": "MASTERCARD",
				"customer_id": "cus_1",
				"currency": "USD"
			}),
		);
	}
}
