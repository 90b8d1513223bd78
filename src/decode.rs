//! Permissive response decoding.
//!
//! Typed entry points attempt to conform a decoded JSON body to the expected
//! shape; on a mismatch the raw value is returned instead of failing the call.
//! Callers that only need a couple of fields can still read them out of
//! [`Decoded::Raw`].

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{_prelude::*, obs};

/// Outcome of permissively decoding a success response.
#[derive(Clone, PartialEq)]
pub enum Decoded<T> {
	/// The body matched the expected shape.
	Typed(T),
	/// The body decoded as JSON but did not match the expected shape.
	Raw(Value),
}
impl<T> Decoded<T> {
	/// Returns the typed payload, discarding a raw fallback.
	pub fn typed(self) -> Option<T> {
		match self {
			Decoded::Typed(typed) => Some(typed),
			Decoded::Raw(_) => None,
		}
	}

	/// Borrows the typed payload, when the body matched.
	pub fn as_typed(&self) -> Option<&T> {
		match self {
			Decoded::Typed(typed) => Some(typed),
			Decoded::Raw(_) => None,
		}
	}

	/// Borrows the raw fallback value, when the body did not match.
	pub fn raw(&self) -> Option<&Value> {
		match self {
			Decoded::Typed(_) => None,
			Decoded::Raw(value) => Some(value),
		}
	}

	/// Returns `true` when the body matched the expected shape.
	pub fn is_typed(&self) -> bool {
		matches!(self, Decoded::Typed(_))
	}
}
impl<T> Debug for Decoded<T>
where
	T: Debug,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Decoded::Typed(typed) => f.debug_tuple("Decoded::Typed").field(typed).finish(),
			Decoded::Raw(value) => f.debug_tuple("Decoded::Raw").field(value).finish(),
		}
	}
}

/// Conforms a decoded JSON value to `T`, degrading to the raw value on mismatch.
pub fn permissive<T>(value: Value) -> Decoded<T>
where
	T: DeserializeOwned,
{
	match serde_path_to_error::deserialize(value.clone()) {
		Ok(typed) => Decoded::Typed(typed),
		Err(err) => {
			obs::record_decode_fallback(std::any::type_name::<T>(), &err.path().to_string());

			Decoded::Raw(value)
		},
	}
}
