//! Customer payloads: profile model, creation/update bodies, and KYC tiers.

// self
use crate::{_prelude::*, model::ValidationError};

/// Customer profile returned by the customer endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
	/// Customer identifier.
	pub id: String,
	/// First name.
	pub first_name: String,
	/// Last name.
	pub last_name: String,
	/// Middle name.
	pub middle_name: String,
	/// Email address.
	pub email: String,
	/// Phone number.
	pub phone_number: String,
	/// ISO country code.
	pub country: String,
	/// Lifecycle status label.
	pub status: String,
	/// Whether the customer is blacklisted.
	pub is_blacklisted: bool,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

/// Body for creating a customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerBody {
	/// First name.
	pub firstname: String,
	/// Last name.
	pub lastname: String,
	/// Middle name.
	pub middlename: String,
	/// ISO country code.
	pub country: String,
	/// Email address.
	pub email: String,
}

/// Body for updating a customer's contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerBody {
	/// Phone number.
	pub phone_number: String,
	/// Email address.
	pub email: String,
}

/// KYC tier requested for a customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycTier {
	/// Tier one: personal information only.
	#[serde(rename = "ONE")]
	One,
	/// Tier two: identity document only.
	#[serde(rename = "TWO")]
	Two,
	/// Full tier: information and document.
	#[serde(rename = "FULL")]
	Full,
}
impl KycTier {
	/// Returns the wire spelling of the tier.
	pub const fn as_str(self) -> &'static str {
		match self {
			KycTier::One => "ONE",
			KycTier::Two => "TWO",
			KycTier::Full => "FULL",
		}
	}
}

/// Identity document section of a KYC submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Document kind label.
	pub document_type: String,
	/// Document image or reference.
	pub document: String,
	/// Passport image or reference.
	pub passport: String,
	/// Document number.
	pub document_number: String,
}

/// Personal information section of a KYC submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Information {
	/// Street address.
	pub address: String,
	/// City.
	pub city: String,
	/// Bank verification number.
	pub bvn: String,
	/// State or region.
	pub state: String,
	/// ISO country code.
	pub country: String,
	/// Postal code.
	pub postal_code: String,
}

/// Body for a tiered KYC submission.
///
/// Tier ONE requires `information`, tier TWO requires `document`, and FULL
/// requires both; [`validate`](Self::validate) enforces this before dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerKycBody {
	/// Requested tier.
	pub tier: KycTier,
	/// Identity document section.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub document: Option<Document>,
	/// Personal information section.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub information: Option<Information>,
}
impl CustomerKycBody {
	/// Checks the tier's mandatory sections.
	pub fn validate(&self) -> Result<(), ValidationError> {
		let require_information = matches!(self.tier, KycTier::One | KycTier::Full);
		let require_document = matches!(self.tier, KycTier::Two | KycTier::Full);

		if require_information && self.information.is_none() {
			return Err(ValidationError::MissingKycSection {
				tier: self.tier.as_str(),
				section: "information",
			});
		}
		if require_document && self.document.is_none() {
			return Err(ValidationError::MissingKycSection {
				tier: self.tier.as_str(),
				section: "document",
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn information() -> Information {
		Information {
			address: "1 Marina Rd".into(),
			city: "Lagos".into(),
			bvn: "12345678901".into(),
			state: "LA".into(),
			country: "NG".into(),
			postal_code: "100001".into(),
		}
	}

	fn document() -> Document {
		Document {
			document_type: "PASSPORT".into(),
			document: "doc-ref".into(),
			passport: "passport-ref".into(),
			document_number: "A01234567".into(),
		}
	}

	#[test]
	fn tier_one_requires_information() {
		let body = CustomerKycBody { tier: KycTier::One, document: None, information: None };

		assert_eq!(
			body.validate(),
			Err(ValidationError::MissingKycSection { tier: "ONE", section: "information" }),
		);

		let body =
			CustomerKycBody { tier: KycTier::One, document: None, information: Some(information()) };

		body.validate().expect("Tier ONE with information should validate.");
	}

	#[test]
	fn tier_two_requires_a_document() {
		let body = CustomerKycBody { tier: KycTier::Two, document: None, information: None };

		assert_eq!(
			body.validate(),
			Err(ValidationError::MissingKycSection { tier: "TWO", section: "document" }),
		);
	}

	#[test]
	fn full_tier_requires_both_sections() {
		let body =
			CustomerKycBody { tier: KycTier::Full, document: Some(document()), information: None };

		assert_eq!(
			body.validate(),
			Err(ValidationError::MissingKycSection { tier: "FULL", section: "information" }),
		);

		let body = CustomerKycBody {
			tier: KycTier::Full,
			document: Some(document()),
			information: Some(information()),
		};

		body.validate().expect("Full tier with both sections should validate.");
	}

	#[test]
	fn tiers_serialize_with_their_wire_spelling() {
		let rendered = serde_json::to_string(&KycTier::Full).expect("Tier should serialize.");

		assert_eq!(rendered, "\"FULL\"");
	}
}
