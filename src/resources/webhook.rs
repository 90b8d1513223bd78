//! Webhook resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::ApiClient,
	model::SuccessResponse,
};

/// Webhook delivery endpoints.
#[derive(Clone, Debug)]
pub struct Webhook {
	client: Arc<ApiClient>,
}
impl Webhook {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Sends a test event to the webhook.
	pub async fn test(&self, id: &str) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/webhooks/{id}/test"), &serde_json::json!({})).await
	}

	/// Redelivers the webhook's last failed event.
	pub async fn retry(&self, id: &str) -> Result<Decoded<SuccessResponse>> {
		self.client.post(format!("/webhooks/{id}/retry"), &serde_json::json!({})).await
	}
}
