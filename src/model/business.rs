//! Business profile payload.

// self
use crate::_prelude::*;

/// Business profile returned by the business endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessModel {
	/// Business identifier.
	pub id: String,
	/// Registered address.
	pub address: String,
	/// ISO country code.
	pub country: String,
	/// Contact email address.
	pub email: String,
	/// Logo URL.
	pub logo: String,
	/// URL-safe business slug.
	pub slug: String,
	/// Business type label.
	#[serde(rename = "type")]
	pub kind: String,
	/// Record creation timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Record update timestamp.
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
