//! Shared payloads: generic acknowledgements, pagination, request refinements.

// self
use crate::{_prelude::*, gateway::Query};

/// Generic acknowledgement returned by action endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
	/// Human-readable outcome description.
	pub message: String,
}

/// Structured error payload returned by failing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Human-readable failure description.
	pub message: String,
	/// Optional field-level details.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub values: Option<serde_json::Value>,
}

/// Pagination window shared by every listing endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAndLimitQuery {
	/// 1-based page index.
	pub page: u32,
	/// Page size.
	pub limit: u32,
}
impl PageAndLimitQuery {
	/// Creates a window for the provided page and limit.
	pub fn new(page: u32, limit: u32) -> Self {
		Self { page, limit }
	}

	/// Renders the window as URL query parameters.
	pub fn to_query(self) -> Query {
		let mut query = Query::new();

		query.insert("page".into(), self.page.to_string());
		query.insert("limit".into(), self.limit.to_string());

		query
	}
}
impl Default for PageAndLimitQuery {
	fn default() -> Self {
		Self { page: 1, limit: 10 }
	}
}

/// Errors raised when a request payload fails its shape refinements.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// `customer_id` is mandatory for every card type except LITE.
	#[error("customer_id is required for non-lite cards.")]
	MissingCustomerId,
	/// A KYC tier was submitted without its mandatory section.
	#[error("The {tier} KYC tier requires the {section} section.")]
	MissingKycSection {
		/// Tier label as sent on the wire.
		tier: &'static str,
		/// Name of the missing payload section.
		section: &'static str,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn pagination_defaults_to_first_page_of_ten() {
		let query = PageAndLimitQuery::default().to_query();

		assert_eq!(query.get("page").map(String::as_str), Some("1"));
		assert_eq!(query.get("limit").map(String::as_str), Some("10"));
	}

	#[test]
	fn pagination_keys_iterate_in_sorted_order() {
		let keys: Vec<_> = PageAndLimitQuery::new(3, 25).to_query().into_keys().collect();

		assert_eq!(keys, ["limit", "page"]);
	}
}
