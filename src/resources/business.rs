//! Business resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::{ApiClient, Query},
	model::BusinessModel,
};

/// Business profile endpoint.
#[derive(Clone, Debug)]
pub struct Business {
	client: Arc<ApiClient>,
}
impl Business {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Retrieves the authenticated business profile.
	pub async fn get(&self) -> Result<Decoded<BusinessModel>> {
		self.client.get("/business", Query::new()).await
	}
}
