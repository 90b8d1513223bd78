//! Authenticated request gateway with lazy token acquisition and 401-retry orchestration.
//!
//! Every resource facade funnels through [`ApiClient`]. The gateway lazily
//! derives a bearer session via the Basic-auth exchange on the first
//! authenticated call, re-authenticates at most once when a call comes back
//! 401, and applies the header precedence rules: an explicit `Authorization`
//! override is used verbatim and bypasses the token logic entirely, which is
//! also how the exchange itself avoids recursing. A per-client singleflight
//! guard ensures concurrent callers piggy-back on the same in-flight exchange
//! instead of stampeding the auth endpoint.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
// self
use crate::{
	_prelude::*,
	auth::{SecretKey, SessionToken},
	config::ClientOptions,
	decode::{self, Decoded},
	error::{ApiError, ConfigError, DecodeError},
	http::{ApiTransport, Method, PreparedRequest, RawResponse},
	obs::{self, CallKind, CallOutcome, RequestSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Query-parameter map; sorted so URLs are stable for a given input.
pub type Query = BTreeMap<String, String>;

/// Fixed user agent attached to every request.
pub const USER_AGENT: &str = "Swervpay/Rust-Sdk";

/// Transient description of a single API call.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: Method,
	/// Path below the versioned API root, starting with `/`.
	pub path: String,
	/// Query parameters, URL-encoded for GET/HEAD requests.
	pub query: Query,
	/// JSON body for methods that carry one; `None` sends an empty object.
	pub body: Option<Value>,
	/// Explicit `Authorization` value; used verbatim and never retried.
	pub authorization: Option<String>,
	/// Extra headers layered over the defaults.
	pub headers: BTreeMap<String, String>,
}
impl RequestDescriptor {
	/// Creates a descriptor for the provided method and path.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			query: Query::new(),
			body: None,
			authorization: None,
			headers: BTreeMap::new(),
		}
	}

	/// Creates a GET descriptor.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::Get, path)
	}

	/// Creates a POST descriptor.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::Post, path)
	}

	/// Creates a PUT descriptor.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::Put, path)
	}

	/// Creates a DELETE descriptor.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::Delete, path)
	}

	/// Attaches query parameters.
	pub fn with_query(mut self, query: Query) -> Self {
		self.query = query;

		self
	}

	/// Attaches a JSON body.
	pub fn with_body(mut self, body: Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Supplies an explicit `Authorization` value, bypassing the bearer token.
	pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
		self.authorization = Some(value.into());

		self
	}

	/// Layers an extra header over the defaults.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into(), value.into());

		self
	}
}

/// Authenticated request gateway shared by every resource facade.
///
/// Holds the transport, the immutable options, and the cached bearer session.
/// The session is the only mutable state; it is replaced by the gateway's own
/// re-authentication routine or the explicit
/// [`set_access_token`](Self::set_access_token) override, never by callers
/// directly.
pub struct ApiClient {
	transport: Arc<dyn ApiTransport>,
	options: ClientOptions,
	api_url: Url,
	session: RwLock<Option<SessionToken>>,
	auth_guard: AsyncMutex<()>,
}
impl ApiClient {
	/// Creates a gateway over the caller-provided transport.
	///
	/// The secret key is validated here unless a pre-obtained access token is
	/// supplied, so malformed credentials fail before any network call.
	pub fn with_transport(
		transport: Arc<dyn ApiTransport>,
		options: ClientOptions,
	) -> Result<Self> {
		let api_url = options.api_url().map_err(Error::from)?;
		let session = match &options.access_token {
			Some(token) => Some(SessionToken::pre_issued(token)),
			None => {
				SecretKey::parse(&options.secret_key).map_err(ConfigError::from)?;

				None
			},
		};

		Ok(Self {
			transport,
			options,
			api_url,
			session: RwLock::new(session),
			auth_guard: AsyncMutex::new(()),
		})
	}

	/// Returns the configured options.
	pub fn options(&self) -> &ClientOptions {
		&self.options
	}

	/// Returns the versioned API root.
	pub fn api_url(&self) -> &Url {
		&self.api_url
	}

	/// Returns the currently cached access token, if any.
	pub fn access_token(&self) -> Option<String> {
		self.session.read().as_ref().map(|session| session.access_token().expose().to_owned())
	}

	/// Injects a pre-obtained access token, replacing any cached session.
	pub fn set_access_token(&self, token: impl Into<String>) {
		*self.session.write() = Some(SessionToken::pre_issued(token));
	}

	/// Issues a GET request and permissively decodes the response into `T`.
	pub async fn get<T>(&self, path: impl Into<String>, query: Query) -> Result<Decoded<T>>
	where
		T: DeserializeOwned,
	{
		let value = self.dispatch(RequestDescriptor::get(path).with_query(query)).await?;

		Ok(decode::permissive(value))
	}

	/// Issues a POST request and permissively decodes the response into `T`.
	pub async fn post<T>(
		&self,
		path: impl Into<String>,
		body: &(impl Serialize + ?Sized),
	) -> Result<Decoded<T>>
	where
		T: DeserializeOwned,
	{
		let value =
			self.dispatch(RequestDescriptor::post(path).with_body(to_body(body)?)).await?;

		Ok(decode::permissive(value))
	}

	/// Issues a PUT request and permissively decodes the response into `T`.
	pub async fn put<T>(
		&self,
		path: impl Into<String>,
		body: &(impl Serialize + ?Sized),
	) -> Result<Decoded<T>>
	where
		T: DeserializeOwned,
	{
		let value = self.dispatch(RequestDescriptor::put(path).with_body(to_body(body)?)).await?;

		Ok(decode::permissive(value))
	}

	/// Issues a DELETE request and permissively decodes the response into `T`.
	pub async fn delete<T>(
		&self,
		path: impl Into<String>,
		body: &(impl Serialize + ?Sized),
	) -> Result<Decoded<T>>
	where
		T: DeserializeOwned,
	{
		let value =
			self.dispatch(RequestDescriptor::delete(path).with_body(to_body(body)?)).await?;

		Ok(decode::permissive(value))
	}

	/// Dispatches an arbitrary descriptor and returns the decoded JSON body.
	pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value> {
		self.dispatch(descriptor).await
	}

	async fn dispatch(&self, descriptor: RequestDescriptor) -> Result<Value> {
		const KIND: CallKind = CallKind::Api;

		let span = RequestSpan::new(KIND, descriptor.method.as_str(), &descriptor.path);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.dispatch_inner(descriptor)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn dispatch_inner(&self, descriptor: RequestDescriptor) -> Result<Value> {
		let (authorization, bearer) = match descriptor.authorization.clone() {
			Some(value) => (value, None),
			None => {
				let token = self.ensure_session().await?;

				(format!("Bearer {token}"), Some(token))
			},
		};
		let response = self.transport.execute(self.prepare(&descriptor, &authorization)?).await?;

		// Overridden calls never retry; `bearer` is `None` for them.
		if let Some(stale) = bearer.filter(|_| response.status == 401) {
			obs::record_call_outcome(CallKind::Api, CallOutcome::Retry);

			let fresh = self.refresh_session(&stale).await?;
			let retry = self
				.transport
				.execute(self.prepare(&descriptor, &format!("Bearer {fresh}"))?)
				.await?;

			return Self::parse_response(retry);
		}

		Self::parse_response(response)
	}

	fn prepare(
		&self,
		descriptor: &RequestDescriptor,
		authorization: &str,
	) -> Result<PreparedRequest> {
		let mut url = Url::parse(&format!("{}{}", self.api_url, descriptor.path))
			.map_err(|source| ConfigError::InvalidPath { path: descriptor.path.clone(), source })?;

		if !descriptor.query.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (key, value) in &descriptor.query {
				pairs.append_pair(key, value);
			}
		}

		let mut headers = BTreeMap::new();

		headers.insert("Content-Type".into(), "application/json".into());
		headers.insert("User-Agent".into(), USER_AGENT.into());
		headers.insert("Authorization".into(), authorization.into());

		for (name, value) in &descriptor.headers {
			headers.insert(name.clone(), value.clone());
		}

		let body = if descriptor.method.allows_body() {
			let value = descriptor.body.clone().unwrap_or_else(|| json!({}));

			Some(serde_json::to_string(&value).map_err(|source| ConfigError::InvalidBody { source })?)
		} else {
			None
		};

		Ok(PreparedRequest { method: descriptor.method, url, headers, body })
	}

	fn parse_response(response: RawResponse) -> Result<Value> {
		let status = response.status;

		if !matches!(status, 200 | 201) {
			let body = decode_error_body(&response.body);

			return Err(ApiError { status, body }.into());
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError::Json { source, status }.into())
	}

	fn live_bearer(&self) -> Option<String> {
		self.session
			.read()
			.as_ref()
			.filter(|session| !session.is_expired())
			.map(|session| session.access_token().expose().to_owned())
	}

	/// Returns the cached bearer, deriving one via the exchange when missing
	/// or expired. Concurrent callers share a single in-flight exchange.
	async fn ensure_session(&self) -> Result<String> {
		if let Some(bearer) = self.live_bearer() {
			return Ok(bearer);
		}

		let _singleflight = self.auth_guard.lock().await;

		if let Some(bearer) = self.live_bearer() {
			return Ok(bearer);
		}

		self.exchange_credentials().await
	}

	/// Replaces a bearer the server just rejected. If another task already
	/// swapped the session, its token is reused instead of exchanging again.
	async fn refresh_session(&self, stale: &str) -> Result<String> {
		let _singleflight = self.auth_guard.lock().await;

		if let Some(bearer) = self.live_bearer() {
			if bearer != stale {
				return Ok(bearer);
			}
		}

		self.exchange_credentials().await
	}

	/// Runs the Basic-auth exchange against `/auth` and caches the session.
	///
	/// Hits the transport directly with the Basic header so the bearer logic
	/// (and its 401 retry) is bypassed; the exchange never recurses.
	async fn exchange_credentials(&self) -> Result<String> {
		let key = SecretKey::parse(&self.options.secret_key).map_err(ConfigError::from)?;
		let basic = format!(
			"Basic {}",
			BASE64.encode(format!("{}:{}", self.options.business_id, key.expose()))
		);
		let descriptor = RequestDescriptor::post("/auth");
		let span = RequestSpan::new(CallKind::Auth, descriptor.method.as_str(), &descriptor.path);

		obs::record_call_outcome(CallKind::Auth, CallOutcome::Attempt);

		let result = span
			.instrument(async {
				let response = self.transport.execute(self.prepare(&descriptor, &basic)?).await?;

				Self::parse_response(response)
			})
			.await;

		obs::record_call_outcome(
			CallKind::Auth,
			if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure },
		);

		let session = SessionToken::from_exchange(&result?)?;
		let bearer = session.access_token().expose().to_owned();

		*self.session.write() = Some(session);

		Ok(bearer)
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient {
	/// Creates a gateway with the crate's default reqwest transport, honoring
	/// the configured request timeout.
	pub fn new(options: ClientOptions) -> Result<Self> {
		let transport = Arc::new(ReqwestTransport::from_options(&options)?);

		Self::with_transport(transport, options)
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("api_url", &self.api_url)
			.field("options", &self.options)
			.field("session_set", &self.session.read().is_some())
			.finish()
	}
}

fn to_body(body: &(impl Serialize + ?Sized)) -> Result<Value> {
	serde_json::to_value(body).map_err(|source| ConfigError::InvalidBody { source }.into())
}

fn decode_error_body(body: &[u8]) -> Value {
	serde_json::from_slice(body)
		.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
