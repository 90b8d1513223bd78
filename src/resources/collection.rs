//! Collection resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{CollectionHistory, CreateCollectionBody, PageAndLimitQuery, WalletModel},
};

/// Collection endpoints; collections settle into wallet-shaped accounts.
#[derive(Clone, Debug)]
pub struct Collection {
	client: Arc<ApiClient>,
}
impl Collection {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves a collection account by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<WalletModel>> {
		self.client.get(format!("/collections/{id}"), Query::new()).await
	}

	/// Lists collection accounts for the provided pagination window.
	pub async fn list(&self, query: PageAndLimitQuery) -> Result<Decoded<Vec<WalletModel>>> {
		self.client.get("/collections", query.to_query()).await
	}

	/// Opens a collection account.
	pub async fn create(&self, body: &CreateCollectionBody) -> Result<Decoded<WalletModel>> {
		self.client.post("/collections", body).await
	}

	/// Retrieves a single settlement entry.
	pub async fn transaction(
		&self,
		id: &str,
		transaction_id: &str,
	) -> Result<Decoded<CollectionHistory>> {
		self.client
			.get(format!("/collections/{id}/transactions/{transaction_id}"), Query::new())
			.await
	}

	/// Lists a collection's settlement entries.
	pub async fn transactions(
		&self,
		id: &str,
		query: PageAndLimitQuery,
	) -> Result<Decoded<Vec<CollectionHistory>>> {
		self.client.get(format!("/collections/{id}/transactions"), query.to_query()).await
	}
}
