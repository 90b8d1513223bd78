//! Identity-verification payloads.

// self
use crate::_prelude::*;

/// Body for a BVN lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityBvnBody {
	/// Bank verification number to look up.
	pub bvn: String,
}

/// Verified identity details returned by the BVN endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BvnDetails {
	/// Bank verification number.
	pub bvn: String,
	/// First name on record.
	pub first_name: String,
	/// Last name on record.
	pub last_name: String,
	/// Middle name on record.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub middle_name: Option<String>,
	/// Date of birth as reported by the registry.
	pub date_of_birth: String,
	/// Phone number on record.
	pub phone_number: String,
	/// Gender on record.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gender: Option<String>,
}
