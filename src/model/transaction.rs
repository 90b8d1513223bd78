//! Ledger transaction model shared by the transaction and payout endpoints.

// self
use crate::_prelude::*;

/// Ledger transaction returned by the transaction endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionModel {
	/// Transaction identifier.
	pub id: String,
	/// Counterparty account name.
	pub account_name: String,
	/// Counterparty account number.
	pub account_number: String,
	/// Counterparty bank name.
	pub bank_name: String,
	/// Counterparty bank code.
	pub bank_code: String,
	/// Transaction amount.
	pub amount: f64,
	/// Fees charged for the transaction.
	pub charges: f64,
	/// Fiat conversion rate applied.
	pub fiat_rate: f64,
	/// Category label.
	pub category: String,
	/// Free-form detail line.
	pub detail: String,
	/// Transaction reference.
	pub reference: String,
	/// Processor session identifier.
	pub session_id: String,
	/// Whether the transaction was reported.
	pub report: bool,
	/// Report message, when reported.
	pub report_message: String,
	/// Lifecycle status label.
	pub status: String,
	/// Transaction type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
