//! Client configuration surface and API base-URL assembly.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://app.swervpay.co/api/";
/// Sandbox API host, selected by [`ClientOptions::with_sandbox`].
pub const SANDBOX_BASE_URL: &str = "https://sandbox.swervpay.co/api/";
/// Default versioned path segment.
pub const DEFAULT_VERSION: &str = "v1";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Immutable configuration consumed by the gateway.
///
/// Construct with [`ClientOptions::new`] and refine with the chainable
/// `with_*` setters.
#[derive(Clone)]
pub struct ClientOptions {
	/// Business identifier paired with the secret key on the Basic exchange.
	pub business_id: String,
	/// Raw secret key of shape `sk_<env>_<alnum>`; validated before first use.
	pub secret_key: String,
	/// Selects the sandbox host when no explicit base URL is set.
	pub sandbox: bool,
	/// Request timeout applied at transport construction.
	pub timeout: std::time::Duration,
	/// Versioned path segment appended to the base URL.
	pub version: String,
	/// Explicit base URL override; wins over the sandbox flag.
	pub base_url: Option<Url>,
	/// Pre-obtained access token; bypasses the authentication exchange.
	pub access_token: Option<String>,
}
impl ClientOptions {
	/// Creates options for the provided business identifier and secret key.
	pub fn new(business_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
		Self {
			business_id: business_id.into(),
			secret_key: secret_key.into(),
			sandbox: false,
			timeout: DEFAULT_TIMEOUT,
			version: DEFAULT_VERSION.into(),
			base_url: None,
			access_token: None,
		}
	}

	/// Toggles the sandbox host.
	pub fn with_sandbox(mut self, sandbox: bool) -> Self {
		self.sandbox = sandbox;

		self
	}

	/// Overrides the request timeout (defaults to 30 seconds).
	pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Overrides the versioned path segment (defaults to `v1`).
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();

		self
	}

	/// Overrides the base URL entirely.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);

		self
	}

	/// Supplies a pre-obtained access token, bypassing the exchange.
	pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(token.into());

		self
	}

	/// Assembles the versioned API root, e.g. `https://app.swervpay.co/api/v1`.
	pub fn api_url(&self) -> Result<Url, ConfigError> {
		let mut base = match &self.base_url {
			Some(url) => url.to_string(),
			None if self.sandbox => SANDBOX_BASE_URL.into(),
			None => PRODUCTION_BASE_URL.into(),
		};

		if !base.ends_with('/') {
			base.push('/');
		}

		base.push_str(&self.version);

		Url::parse(&base).map_err(|source| ConfigError::InvalidBaseUrl { source })
	}
}
impl Debug for ClientOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientOptions")
			.field("business_id", &self.business_id)
			.field("secret_key", &"<redacted>")
			.field("sandbox", &self.sandbox)
			.field("timeout", &self.timeout)
			.field("version", &self.version)
			.field("base_url", &self.base_url)
			.field("access_token_set", &self.access_token.is_some())
			.finish()
	}
}
