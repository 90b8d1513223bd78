//! Collection payloads: creation body and settlement history entries.

// self
use crate::_prelude::*;

/// Body for creating a collection account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCollectionBody {
	/// Customer to open the collection for.
	pub customer_id: String,
	/// Collection currency.
	pub currency: String,
	/// Caller-supplied reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
}

/// Settlement recorded against a collection account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionHistory {
	/// History entry identifier.
	pub id: String,
	/// Settled amount.
	pub amount: f64,
	/// Fees charged on settlement.
	#[serde(default)]
	pub charges: f64,
	/// Settlement currency.
	pub currency: String,
	/// Payment method label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payment_method: Option<String>,
	/// Settlement reference.
	pub reference: String,
	/// Lifecycle status label.
	pub status: String,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
