//! FX resource facade.

// self
use crate::{
	_prelude::*,
	decode::Decoded,
	gateway::ApiClient,
	model::{ExchangeRateResponse, FxBody, SuccessResponse},
};

/// Currency exchange endpoints.
#[derive(Clone, Debug)]
pub struct Fx {
	client: Arc<ApiClient>,
}
impl Fx {
	pub(crate) fn new(client: Arc<ApiClient>) -> Self {
		Self { client }
	}

	/// Quotes an exchange without executing it.
	pub async fn rate(&self, body: &FxBody) -> Result<Decoded<ExchangeRateResponse>> {
		self.client.post("/fx/rate", body).await
	}

	/// Executes an exchange between two wallet currencies.
	pub async fn exchange(&self, body: &FxBody) -> Result<Decoded<SuccessResponse>> {
		self.client.post("/fx/exchange", body).await
	}
}
