//! Payout resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{CreatePayoutBody, CreatePayoutResponse, TransactionModel},
};

/// Payout endpoints.
#[derive(Clone, Debug)]
pub struct Payout {
	client: Arc<ApiClient>,
}
impl Payout {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Creates a payout to a bank account.
	pub async fn create(&self, body: &CreatePayoutBody) -> Result<Decoded<CreatePayoutResponse>> {
		self.client.post("/payouts", body).await
	}

	/// Retrieves a payout's transaction record by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<TransactionModel>> {
		self.client.get(format!("/payouts/{id}"), Query::new()).await
	}
}
