//! Credential material and session-token models for the authentication exchange.

pub mod credentials;
pub mod session;

pub use credentials::*;
pub use session::*;
