//! Wire models for the API surface: response payloads and request bodies.
//!
//! Field names follow the API contract verbatim, vendor quirks included, so
//! the serialized form always matches what the endpoints expect.

pub mod bank;
pub mod bill;
pub mod business;
pub mod card;
pub mod collection;
pub mod common;
pub mod customer;
pub mod fx;
pub mod identity;
pub mod payout;
pub mod transaction;
pub mod wallet;

pub use bank::*;
pub use bill::*;
pub use business::*;
pub use card::*;
pub use collection::*;
pub use common::*;
pub use customer::*;
pub use fx::*;
pub use identity::*;
pub use payout::*;
pub use transaction::*;
pub use wallet::*;
