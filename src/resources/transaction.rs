//! Transaction resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{PageAndLimitQuery, TransactionModel},
};

/// Ledger transaction endpoints.
#[derive(Clone, Debug)]
pub struct Transaction {
	client: Arc<ApiClient>,
}
impl Transaction {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves a transaction by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<TransactionModel>> {
		self.client.get(format!("/transactions/{id}"), Query::new()).await
	}

	/// Lists transactions for the provided pagination window.
	pub async fn list(&self, query: PageAndLimitQuery) -> Result<Decoded<Vec<TransactionModel>>> {
		self.client.get("/transactions", query.to_query()).await
	}
}
