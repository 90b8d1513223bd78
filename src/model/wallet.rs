//! Wallet model shared by the wallet and collection endpoints.

// self
use crate::_prelude::*;

/// Virtual account returned by the wallet and collection endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletModel {
	/// Wallet identifier.
	pub id: String,
	/// Owning customer identifier.
	pub customer_id: String,
	/// Display label.
	pub label: String,
	/// Account holder name.
	pub account_name: String,
	/// Account number.
	pub account_number: String,
	/// Account type label.
	pub account_type: String,
	/// Account address.
	pub address: String,
	/// Bank name.
	pub bank_name: String,
	/// Bank code.
	pub bank_code: String,
	/// Bank address.
	pub bank_address: String,
	/// Routing number.
	pub routing_number: String,
	/// Wallet reference.
	pub reference: String,
	/// Settled balance.
	pub balance: f64,
	/// Balance awaiting settlement.
	pub pending_balance: f64,
	/// Lifetime received amount.
	pub total_received: f64,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
