//! Transport primitives for authenticated API calls.
//!
//! The module exposes [`ApiTransport`] alongside [`PreparedRequest`] and
//! [`RawResponse`] so downstream crates can integrate custom HTTP clients (or
//! scripted ones in tests) without touching the gateway's auth logic. The
//! gateway owns URL assembly, headers, and body encoding; a transport only
//! executes the prepared request and reports the status and body bytes.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::ClientOptions, error::ConfigError};

/// Boxed future returned by [`ApiTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// HTTP methods used by the API surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
	/// HTTP GET.
	Get,
	/// HTTP POST.
	Post,
	/// HTTP PUT.
	Put,
	/// HTTP DELETE.
	Delete,
	/// HTTP HEAD.
	Head,
}
impl Method {
	/// Returns the canonical wire spelling.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
			Method::Head => "HEAD",
		}
	}

	/// Returns `true` for methods that carry a request body.
	pub const fn allows_body(self) -> bool {
		!matches!(self, Method::Get | Method::Head)
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully assembled request handed to a transport.
///
/// Headers are kept in a sorted map so a given descriptor always serializes
/// identically; the gateway has already applied the precedence rules.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL including encoded query parameters.
	pub url: Url,
	/// Complete header set (content type, user agent, authorization, extras).
	pub headers: BTreeMap<String, String>,
	/// Serialized JSON body; always `None` for GET/HEAD.
	pub body: Option<String>,
}

/// Status and body bytes captured from an HTTP response.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP stacks capable of executing API calls.
///
/// The trait is the gateway's only dependency on an HTTP implementation.
/// Implementations must be `Send + Sync` so one client can serve concurrent
/// calls, and the returned futures must be `Send` so callers can hop
/// executors freely.
pub trait ApiTransport
where
	Self: Send + Sync,
{
	/// Executes a prepared request, returning the status and body bytes.
	///
	/// Network-level failures map to [`TransportError`]; non-success HTTP
	/// statuses are NOT errors at this layer; the gateway owns that policy.
	fn execute(&self, request: PreparedRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the configured request timeout.
	pub fn from_options(options: &ClientOptions) -> Result<Self, ConfigError> {
		ReqwestClient::builder().timeout(options.timeout).build().map(Self).map_err(ConfigError::from)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiTransport for ReqwestTransport {
	fn execute(&self, request: PreparedRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Put => reqwest::Method::PUT,
				Method::Delete => reqwest::Method::DELETE,
				Method::Head => reqwest::Method::HEAD,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
