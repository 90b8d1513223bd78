//! Session tokens issued by the `/auth` exchange and their lifecycle helpers.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, decode, error::DecodeError};

/// Redacted access-token wrapper keeping bearer material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new access-token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Metadata block returned alongside `access_token` by the exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
	/// Business the token was issued to.
	pub business_id: String,
	/// Token type label reported by the API.
	#[serde(rename = "type")]
	pub kind: String,
	/// Expiry instant as unix seconds.
	pub expires_at: i64,
	/// Issuance instant as unix seconds.
	pub issued_at: i64,
	/// Record creation timestamp.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
	/// Record update timestamp.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

/// Bearer session cached by the gateway between calls.
///
/// Owned exclusively by the gateway; replaced only by its re-authentication
/// routine or the explicit access-token override.
#[derive(Clone)]
pub struct SessionToken {
	access_token: AccessToken,
	issued_at: OffsetDateTime,
	expires_at: Option<OffsetDateTime>,
}
impl SessionToken {
	/// Builds a session from a decoded `/auth` response body.
	///
	/// `access_token` is required; the `token` metadata object is captured
	/// opportunistically and a malformed one only costs the expiry hint.
	pub fn from_exchange(body: &Value) -> Result<Self, DecodeError> {
		let access_token = body
			.get("access_token")
			.and_then(Value::as_str)
			.ok_or(DecodeError::MissingAccessToken)?;
		let metadata = body
			.get("token")
			.cloned()
			.and_then(|value| decode::permissive::<TokenMetadata>(value).typed());
		let now = OffsetDateTime::now_utc();
		let issued_at = metadata
			.as_ref()
			.and_then(|meta| OffsetDateTime::from_unix_timestamp(meta.issued_at).ok())
			.unwrap_or(now);
		let expires_at =
			metadata.as_ref().and_then(|meta| OffsetDateTime::from_unix_timestamp(meta.expires_at).ok());

		Ok(Self { access_token: AccessToken::new(access_token), issued_at, expires_at })
	}

	/// Wraps a pre-obtained token supplied by the caller; never expires locally.
	pub fn pre_issued(token: impl Into<String>) -> Self {
		Self {
			access_token: AccessToken::new(token),
			issued_at: OffsetDateTime::now_utc(),
			expires_at: None,
		}
	}

	/// Returns the bearer secret.
	pub fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	/// Returns the issuance instant.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.issued_at
	}

	/// Returns the expiry instant, when the exchange reported one.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.expires_at
	}

	/// Returns `true` if the session has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` if the session is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionToken")
			.field("access_token", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
