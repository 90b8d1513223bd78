//! Bank directory and account-resolution payloads.

// self
use crate::_prelude::*;

/// Bank directory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankModel {
	/// Clearing code of the bank.
	pub bank_code: String,
	/// Display name of the bank.
	pub bank_name: String,
}

/// Body for resolving an account number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAccountBody {
	/// Clearing code of the bank.
	pub bank_code: String,
	/// Account number to resolve.
	pub account_number: String,
}

/// Resolved account details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAccountModel {
	/// Account holder name.
	pub account_name: String,
	/// Account number.
	pub account_number: String,
	/// Clearing code of the bank.
	pub bank_code: String,
	/// Display name of the bank.
	pub bank_name: String,
}
