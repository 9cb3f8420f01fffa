//! Authentication and session management.
//!
//! This module provides:
//! - `authenticate` / `authenticate_with`: the login exchange that creates a `Session`
//! - `Session`: bearer token, per-operation retry budget and lazy token refresh
//! - `Credentials`: the email/password pair the session re-authenticates with
//!
//! Tokens are refreshed once they are 10 minutes old (configurable).

pub mod credentials;
pub mod login;
pub mod session;

pub use credentials::Credentials;
pub use login::{authenticate, authenticate_with};
pub use session::Session;
