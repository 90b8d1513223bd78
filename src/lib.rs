//! Typed Rust SDK for the Swervpay payments API - customers, cards, wallets, payouts, FX, bills,
//! and webhooks behind one authenticated client.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod gateway;
pub mod http;
pub mod model;
pub mod obs;
pub mod resources;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::SwervpayClient, config::ClientOptions, gateway::ApiClient};

	/// Business identifier shared by the integration-test fixtures.
	pub const TEST_BUSINESS_ID: &str = "biz_swerv";
	/// Well-formed secret key shared by the integration-test fixtures.
	pub const TEST_SECRET_KEY: &str = "sk_test_s3cr3t";
	/// `base64(TEST_BUSINESS_ID:TEST_SECRET_KEY)` as sent on the Basic exchange.
	pub const TEST_BASIC_AUTH: &str = "Basic Yml6X3N3ZXJ2OnNrX3Rlc3RfczNjcjN0";

	/// Builds client options pointing at a mock server base URL.
	pub fn test_options(base_url: &str) -> ClientOptions {
		ClientOptions::new(TEST_BUSINESS_ID, TEST_SECRET_KEY)
			.with_base_url(Url::parse(base_url).expect("Mock server URL should parse."))
	}

	/// Constructs a full [`SwervpayClient`] against a mock server.
	pub fn build_test_client(base_url: &str) -> SwervpayClient {
		SwervpayClient::new(test_options(base_url))
			.expect("Test client should build from valid fixture options.")
	}

	/// Constructs a bare [`ApiClient`] gateway against a mock server.
	pub fn build_test_gateway(options: ClientOptions) -> ApiClient {
		ApiClient::new(options).expect("Test gateway should build from valid fixture options.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
