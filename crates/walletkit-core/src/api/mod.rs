//! Transport and request-execution layer for the wallet service.
//!
//! `ApiClient` reaches the host, `ApiRequest` describes one call, and the
//! executor runs a request under a retry budget, turning service messages
//! into typed errors through an `ErrorMap`.
//!
//! Authenticated calls carry the bearer token in the `authToken` header.

pub mod client;
pub mod envelope;
pub mod error;
pub mod error_map;
pub mod executor;
pub mod request;

pub use client::ApiClient;
pub use envelope::EnvelopeData;
pub use error::{Result, WalletError};
pub use error_map::ErrorMap;
pub use executor::Retries;
pub use request::ApiRequest;
