//! Bill-payment resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{
		BillBiller, BillCategory, BillCreateBody, BillItem, BillTransaction,
		BillValidateCustomerBody, SuccessResponse,
	},
};

/// Bill payment endpoints.
#[derive(Clone, Debug)]
pub struct Bill {
	client: Arc<ApiClient>,
}
impl Bill {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Lists available bill categories.
	pub async fn categories(&self) -> Result<Decoded<Vec<BillCategory>>> {
		self.client.get("/bills/categories", Query::new()).await
	}

	/// Lists the billers within a category.
	pub async fn billers(&self, name: &str) -> Result<Decoded<Vec<BillBiller>>> {
		self.client.get(format!("/bills/categories/{name}"), Query::new()).await
	}

	/// Lists the items offered by a biller within a category.
	pub async fn items(&self, name: &str, biller_id: &str) -> Result<Decoded<Vec<BillItem>>> {
		self.client.get(format!("/bills/categories/{name}/items/{biller_id}"), Query::new()).await
	}

	/// Validates a customer's reference with a biller before paying.
	pub async fn validate_customer(
		&self,
		body: &BillValidateCustomerBody,
	) -> Result<Decoded<SuccessResponse>> {
		self.client.post("/bills/validate", body).await
	}

	/// Creates a bill payment.
	pub async fn create(&self, body: &BillCreateBody) -> Result<Decoded<BillTransaction>> {
		self.client.post("/bills", body).await
	}

	/// Retrieves a bill payment by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<BillTransaction>> {
		self.client.get(format!("/bills/{id}"), Query::new()).await
	}
}
