//! Payout request and acknowledgement payloads.

// self
use crate::_prelude::*;

/// Body for creating a payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayoutBody {
	/// Destination bank code.
	pub bank_code: String,
	/// Destination account number.
	pub account_number: String,
	/// Amount to pay out; the API takes this field as a string.
	pub amount: String,
	/// Payout currency.
	#[serde(default = "default_payout_currency")]
	pub currency: String,
	/// Caller-supplied reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reference: Option<String>,
	/// Narration line (wire spelling kept as the API defines it).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub naration: Option<String>,
	/// Beneficiary notification email.
	pub email: String,
}

/// Acknowledgement returned when a payout is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayoutResponse {
	/// Human-readable outcome description.
	pub message: String,
	/// Reference assigned to the payout.
	pub reference: String,
}

fn default_payout_currency() -> String {
	"NGN".into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn optional_fields_are_omitted_from_the_wire_form() {
		let body = CreatePayoutBody {
			bank_code: "058".into(),
			account_number: "0123456789".into(),
			amount: "2500".into(),
			currency: default_payout_currency(),
			reference: None,
			naration: None,
			email: "ops@acme.dev".into(),
		};
		let value = serde_json::to_value(&body).expect("Payout body should serialize.");

		assert_eq!(
			value,
			serde_json::json!({
				"bank_code": "058",
				"account_number": "0123456789",
				"amount": "2500",
				"currency": "NGN",
				"email": "ops@acme.dev"
			}),
		);
	}
}
