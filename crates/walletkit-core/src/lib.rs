//! walletkit-core - typed client for the wallet service HTTP API.
//!
//! Log in once with [`authenticate`] and call operations on the returned
//! [`Session`]. Each operation runs under a bounded attempt budget and
//! refreshes the bearer token when it is older than the freshness window:
//!
//! ```rust,ignore
//! use walletkit_core::{authenticate, models::BalanceQuery, DEFAULT_RETRIES};
//!
//! let mut session = authenticate("ann@example.com", "secret", DEFAULT_RETRIES).await?;
//! let balance = session.balance(&BalanceQuery::default()).await?;
//! for coin in &balance.coins {
//!     println!("{:?}: {}", coin.symbol, coin.balance);
//! }
//! ```
//!
//! The library emits `tracing` events and installs no subscriber.

pub mod api;
pub mod auth;
pub mod config;
mod endpoints;
pub mod models;
pub mod utils;

pub use api::{Result, WalletError};
pub use auth::{authenticate, authenticate_with, Credentials, Session};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_RETRIES};
