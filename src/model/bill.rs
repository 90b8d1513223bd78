//! Bill-payment payloads: categories, billers, items, and transactions.

// self
use crate::_prelude::*;

/// Bill category directory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillCategory {
	/// Category identifier.
	pub id: String,
	/// Category name as used in paths.
	pub name: String,
}

/// Biller available within a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBiller {
	/// Biller identifier.
	pub id: String,
	/// Biller display name.
	pub name: String,
	/// Processor code for the biller.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
}

/// Product or plan offered by a biller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
	/// Item identifier.
	pub id: String,
	/// Item display name.
	pub name: String,
	/// Fixed price, when the item is not variable-amount.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
	/// Processor code for the item.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
}

/// Body for validating a bill customer before payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillValidateCustomerBody {
	/// Biller identifier.
	pub biller_id: String,
	/// Item identifier within the biller.
	pub item_id: String,
	/// Customer reference at the biller (meter, smartcard, or account number).
	pub customer_id: String,
}

/// Body for creating a bill payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillCreateBody {
	/// Amount to pay.
	pub amount: u64,
	/// Biller identifier.
	pub biller_id: String,
	/// Item identifier within the biller.
	pub item_id: String,
	/// Customer reference at the biller.
	pub customer_id: String,
	/// Caller-supplied reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
}

/// Bill payment transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BillTransaction {
	/// Transaction identifier.
	pub id: String,
	/// Paid amount.
	pub amount: f64,
	/// Biller display name.
	pub biller: String,
	/// Category name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	/// Transaction reference.
	pub reference: String,
	/// Lifecycle status label.
	pub status: String,
	/// Prepaid token issued by the biller, when applicable.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
