//! Identity-verification resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::ApiClient,
	model::{BvnDetails, IdentityBvnBody},
};

/// Identity verification endpoints.
#[derive(Clone, Debug)]
pub struct Identity {
	client: Arc<ApiClient>,
}
impl Identity {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Looks up the identity details behind a bank verification number.
	pub async fn bvn(&self, body: &IdentityBvnBody) -> Result<Decoded<BvnDetails>> {
		self.client.post("/identity/bvn", body).await
	}
}
