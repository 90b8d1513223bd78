//! Bank directory and account-resolution facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::{BankModel, ResolveAccountBody, ResolveAccountModel},
};

/// Endpoints that sit outside the main resource families.
#[derive(Clone, Debug)]
pub struct Other {
	client: Arc<ApiClient>,
}
impl Other {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Lists supported banks.
	pub async fn banks(&self) -> Result<Decoded<Vec<BankModel>>> {
		self.client.get("/banks", Query::new()).await
	}

	/// Resolves an account number to its holder details.
	pub async fn resolve_account_number(
		&self,
		body: &ResolveAccountBody,
	) -> Result<Decoded<ResolveAccountModel>> {
		self.client.post("/resolve-account-number", body).await
	}
}
