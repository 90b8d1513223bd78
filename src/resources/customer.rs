//! Customer resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{
		CreateCustomerBody, CustomerKycBody, CustomerModel, PageAndLimitQuery, SuccessResponse,
		UpdateCustomerBody,
	},
};

/// Customer endpoints.
#[derive(Clone, Debug)]
pub struct Customer {
	client: Arc<ApiClient>,
}
impl Customer {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves a customer by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<CustomerModel>> {
		self.client.get(format!("/customers/{id}"), Query::new()).await
	}

	/// Lists customers for the provided pagination window.
	pub async fn list(&self, query: PageAndLimitQuery) -> Result<Decoded<Vec<CustomerModel>>> {
		self.client.get("/customers", query.to_query()).await
	}

	/// Creates a customer.
	pub async fn create(&self, body: &CreateCustomerBody) -> Result<Decoded<CustomerModel>> {
		self.client.post("/customers", body).await
	}

	/// Updates a customer's contact details.
	pub async fn update(
		&self,
		id: &str,
		body: &UpdateCustomerBody,
	) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/customers/{id}/update"), body).await
	}

	/// Submits a tiered KYC verification for a customer.
	pub async fn kyc(&self, id: &str, body: &CustomerKycBody) -> Result<Decoded<SuccessResponse>> {
		body.validate().map_err(Error::from)?;

		self.client.post(format!("/customers/{id}/kyc"), body).await
	}

	/// Blacklists a customer.
	pub async fn blacklist(&self, id: &str) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/customers/{id}/blacklist"), &serde_json::json!({})).await
	}
}
