//! Root client wiring every resource facade to one shared gateway.

// self
use crate::{
	_prelude::*,
	gateway::ApiClient,
	resources::{
		Bill, Business, Card, Collection, Customer, Fx, Identity, Other, Payout, Transaction,
		Wallet, Webhook,
	},
};
#[cfg(feature = "reqwest")] use crate::config::ClientOptions;

/// Client for the Swervpay API.
///
/// All resource facades share a single [`ApiClient`], so the bearer session is
/// acquired once and reused across resources.
#[derive(Clone)]
pub struct SwervpayClient {
	api: Arc<ApiClient>,
	/// Bill payment endpoints.
	pub bill: Bill,
	/// Business profile endpoint.
	pub business: Business,
	/// Card endpoints.
	pub card: Card,
	/// Collection endpoints.
	pub collection: Collection,
	/// Customer endpoints.
	pub customer: Customer,
	/// Currency exchange endpoints.
	pub fx: Fx,
	/// Identity verification endpoints.
	pub identity: Identity,
	/// Bank directory and account resolution endpoints.
	pub other: Other,
	/// Payout endpoints.
	pub payout: Payout,
	/// Ledger transaction endpoints.
	pub transaction: Transaction,
	/// Wallet endpoints.
	pub wallet: Wallet,
	/// Webhook delivery endpoints.
	pub webhook: Webhook,
}
impl SwervpayClient {
	/// Wires the resource facades around an existing gateway.
	pub fn with_api_client(api: Arc<ApiClient>) -> Self {
		Self {
			bill: Bill::new(api.clone()),
			business: Business::new(api.clone()),
			card: Card::new(api.clone()),
			collection: Collection::new(api.clone()),
			customer: Customer::new(api.clone()),
			fx: Fx::new(api.clone()),
			identity: Identity::new(api.clone()),
			other: Other::new(api.clone()),
			payout: Payout::new(api.clone()),
			transaction: Transaction::new(api.clone()),
			wallet: Wallet::new(api.clone()),
			webhook: Webhook::new(api.clone()),
			api,
		}
	}

	/// Returns the shared gateway.
	pub fn api(&self) -> &Arc<ApiClient> {
		&self.api
	}
}
#[cfg(feature = "reqwest")]
impl SwervpayClient {
	/// Creates a client with the crate's default reqwest transport.
	///
	/// Malformed credentials fail here, before any network call, unless a
	/// pre-obtained access token is supplied.
	pub fn new(options: ClientOptions) -> Result<Self> {
		Ok(Self::with_api_client(Arc::new(ApiClient::new(options)?)))
	}
}
impl Debug for SwervpayClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SwervpayClient").field("api", &self.api).finish()
	}
}
