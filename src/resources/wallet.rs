//! Wallet resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{PageAndLimitQuery, WalletModel},
};

/// Wallet endpoints.
#[derive(Clone, Debug)]
pub struct Wallet {
	client: Arc<ApiClient>,
}
impl Wallet {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves a wallet by id.
	pub async fn get(&self, id: &str) -> Result<Decoded<WalletModel>> {
		self.client.get(format!("/wallets/{id}"), Query::new()).await
	}

	/// Lists wallets for the provided pagination window.
	pub async fn list(&self, query: PageAndLimitQuery) -> Result<Decoded<Vec<WalletModel>>> {
		self.client.get("/wallets", query.to_query()).await
	}
}
