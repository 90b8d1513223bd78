//! Secret-key validation and redaction.

// self
use crate::_prelude::*;

/// Error returned when credential validation fails.
///
/// The display strings match the wire-level contract callers already match on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialsError {
	/// No secret key was supplied.
	#[error("Missing API key.")]
	Missing,
	/// The secret key does not match the `sk_<env>_<alnum>` shape.
	#[error("Invalid API key.")]
	Invalid,
}

/// Redacted secret key wrapper keeping credential material out of logs.
///
/// Keys have the fixed lexical shape `sk_<env>_<token>` where `env` is lowercase
/// ASCII (e.g. `test`, `live`) and `token` is alphanumeric.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);
impl SecretKey {
	/// Validates and wraps a raw secret key string.
	pub fn parse(value: impl AsRef<str>) -> Result<Self, CredentialsError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Returns the inner key value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns the environment segment of the key (e.g. `test` or `live`).
	pub fn environment(&self) -> &str {
		// Shape is guaranteed by `parse`; the segments always exist.
		self.0.split('_').nth(1).unwrap_or_default()
	}
}
impl AsRef<str> for SecretKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl FromStr for SecretKey {
	type Err = CredentialsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Debug for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SecretKey").field(&"<redacted>").finish()
	}
}
impl Display for SecretKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

fn validate_view(view: &str) -> Result<(), CredentialsError> {
	if view.is_empty() {
		return Err(CredentialsError::Missing);
	}

	let rest = view.strip_prefix("sk_").ok_or(CredentialsError::Invalid)?;
	let (env, token) = rest.split_once('_').ok_or(CredentialsError::Invalid)?;

	if env.is_empty() || !env.chars().all(|c| c.is_ascii_lowercase()) {
		return Err(CredentialsError::Invalid);
	}
	if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric()) {
		return Err(CredentialsError::Invalid);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn well_formed_keys_parse() {
		let key = SecretKey::parse("sk_test_abc123XYZ").expect("Test key fixture should be valid.");

		assert_eq!(key.expose(), "sk_test_abc123XYZ");
		assert_eq!(key.environment(), "test");

		SecretKey::parse("sk_live_0").expect("Minimal live key should be valid.");
	}

	#[test]
	fn malformed_keys_are_rejected() {
		assert_eq!(SecretKey::parse("invalid_key"), Err(CredentialsError::Invalid));
		assert_eq!(SecretKey::parse("sk_TEST_abc"), Err(CredentialsError::Invalid));
		assert_eq!(SecretKey::parse("sk__abc"), Err(CredentialsError::Invalid));
		assert_eq!(SecretKey::parse("sk_test_"), Err(CredentialsError::Invalid));
		assert_eq!(SecretKey::parse("sk_test_abc-123"), Err(CredentialsError::Invalid));
		assert_eq!(SecretKey::parse("sk_test_ab_cd"), Err(CredentialsError::Invalid));
	}

	#[test]
	fn empty_keys_are_reported_as_missing() {
		assert_eq!(SecretKey::parse(""), Err(CredentialsError::Missing));
	}

	#[test]
	fn error_messages_match_the_public_contract() {
		assert_eq!(CredentialsError::Missing.to_string(), "Missing API key.");
		assert_eq!(CredentialsError::Invalid.to_string(), "Invalid API key.");
	}

	#[test]
	fn secret_formatters_redact() {
		let key = SecretKey::parse("sk_test_topsecret").expect("Key fixture should be valid.");

		assert_eq!(format!("{key:?}"), "SecretKey(\"<redacted>\")");
		assert_eq!(format!("{key}"), "<redacted>");
	}
}
