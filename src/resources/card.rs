//! Card resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{
		CardModel, CardTransaction, CreateCardBody, CreateCardResponse, FundOrWithdrawCardBody,
		PageAndLimitQuery, SuccessResponse,
	},
};

/// Card endpoints.
#[derive(Clone, Debug)]
pub struct Card {
	client: Arc<ApiClient>,
}
impl Card {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves a card by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<CardModel>> {
		self.client.get(format!("/cards/{id}"), Query::new()).await
	}

	/// Lists cards for the provided pagination window.
	pub async fn list(&self, query: PageAndLimitQuery) -> Result<Decoded<Vec<CardModel>>> {
		self.client.get("/cards", query.to_query()).await
	}

	/// Issues a new card; `customer_id` is mandatory for non-lite cards.
	pub async fn create(&self, body: &CreateCardBody) -> Result<Decoded<CreateCardResponse>> {
		body.validate().map_err(Error::from)?;

		self.client.post("/cards", body).await
	}

	/// Freezes a card.
	pub async fn freeze(&self, id: &str) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/cards/{id}/freeze"), &serde_json::json!({})).await
	}

	/// Terminates a card.
	pub async fn terminate(&self, id: &str) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/cards/{id}/terminate"), &serde_json::json!({})).await
	}

	/// Funds a card from the business balance.
	pub async fn fund(
		&self,
		id: &str,
		body: &FundOrWithdrawCardBody,
	) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/cards/{id}/fund"), body).await
	}

	/// Withdraws card funds back to the business balance.
	pub async fn withdraw(
		&self,
		id: &str,
		body: &FundOrWithdrawCardBody,
	) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/cards/{id}/withdraw"), body).await
	}

	/// Retrieves a single card transaction.
	pub async fn transaction(
		&self,
		id: &str,
		transaction_id: &str,
	) -> Result<Decoded<CardTransaction>> {
		self.client.get(format!("/cards/{id}/transactions/{transaction_id}"), Query::new()).await
	}

	/// Lists a card's transactions for the provided pagination window.
	pub async fn transactions(
		&self,
		id: &str,
		query: PageAndLimitQuery,
	) -> Result<Decoded<Vec<CardTransaction>>> {
		self.client.get(format!("/cards/{id}/transactions"), query.to_query()).await
	}
}
