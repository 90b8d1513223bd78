//! SDK-level error types shared across the gateway and resource facades.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical SDK error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; raised before any network call.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The API answered with a non-success status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// A response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// A request payload failed its shape refinements.
	#[error(transparent)]
	Validation(#[from] crate::model::ValidationError),
}

/// Configuration and validation failures raised before dispatching a request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Credential material is missing or malformed.
	#[error(transparent)]
	Credentials(#[from] crate::auth::CredentialsError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The configured base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A request path produced an invalid URL against the configured base.
	#[error("Request path `{path}` produces an invalid URL.")]
	InvalidPath {
		/// Offending path template.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A request body could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	InvalidBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO). Propagated unchanged; never retried here.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-success API response carrying the status and the decoded error body.
///
/// Produced for every status outside 200/201, after the single 401-triggered
/// re-authentication retry has been exhausted.
#[derive(Debug, ThisError)]
#[error("API call failed with status {status}: {}.", message_of(.body))]
pub struct ApiError {
	/// HTTP status code returned by the endpoint.
	pub status: u16,
	/// Decoded JSON error body (the raw text when the body was not JSON).
	pub body: Value,
}
impl ApiError {
	/// Returns the server-supplied `message` field, when present.
	pub fn message(&self) -> Option<&str> {
		self.body.get("message").and_then(Value::as_str)
	}

	/// Returns `true` when the response was a 401.
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}
}

/// Decoding failures for response bodies.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// A success response carried a body that is not valid JSON.
	#[error("Response body is not valid JSON.")]
	Json {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// The authentication exchange response omitted `access_token`.
	#[error("Authentication response is missing the access_token field.")]
	MissingAccessToken,
}

fn message_of(body: &Value) -> String {
	match body.get("message").and_then(Value::as_str) {
		Some(message) => message.to_owned(),
		None => body.to_string(),
	}
}
