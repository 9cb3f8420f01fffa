//! The login exchange: email/password in, bearer token out.
//!
//! Used for the initial `authenticate` call (with its own attempt budget)
//! and by `Session::ensure_authenticated` to rotate a stale token (charged
//! to the running operation's budget).

use chrono::{DateTime, Utc};
use tracing::info;

use super::credentials::Credentials;
use super::session::Session;
use crate::api::executor::{self, Retries};
use crate::api::request::{base_headers, ApiRequest};
use crate::api::{ApiClient, ErrorMap, Result, WalletError};
use crate::config::ClientConfig;

const AUTH_PATH: &str = "/v1/auth";

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

fn auth_errors() -> ErrorMap {
    ErrorMap::new()
        .exact("INVALID_PASSWORD", |_| WalletError::IncorrectPassword)
        .exact("EMAIL_NOT_FOUND", |_| WalletError::AccountNotFound)
        .exact("INVALID_EMAIL", |_| WalletError::AccountNotFound)
        .prefix("The email address is badly formatted", |_| WalletError::AccountNotFound)
}

/// Run the login exchange once, retrying transient failures under `retries`.
pub async fn login(
    client: &ApiClient,
    credentials: &Credentials,
    retries: &mut Retries,
) -> Result<IssuedToken> {
    let request = ApiRequest::post(AUTH_PATH, credentials)?;
    let mut data = executor::execute(client, &base_headers(), &request, &auth_errors(), retries).await?;

    let token: String = data.take_field("token")?;
    if token.is_empty() {
        return Err(WalletError::InvalidResponse("Empty token in auth response".to_string()));
    }

    Ok(IssuedToken {
        token,
        issued_at: Utc::now(),
    })
}

/// Log in against the production host with a custom attempt budget.
pub async fn authenticate(
    email: impl Into<String>,
    password: impl Into<String>,
    retries: u32,
) -> Result<Session> {
    authenticate_with(ClientConfig::default().with_retries(retries), email, password).await
}

/// Log in with an explicit client configuration.
pub async fn authenticate_with(
    config: ClientConfig,
    email: impl Into<String>,
    password: impl Into<String>,
) -> Result<Session> {
    let client = ApiClient::new(&config)?;
    let credentials = Credentials::new(email, password);

    let mut retries = Retries::new(config.retries, config.retry_delay);
    let issued = login(&client, &credentials, &mut retries).await?;
    info!(
        email = credentials.email(),
        attempts = retries.attempts_made() + 1,
        "Authenticated"
    );

    Session::new(client, credentials, issued, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_mapping() {
        let errors = auth_errors();
        assert!(matches!(errors.classify("INVALID_PASSWORD"), Some(WalletError::IncorrectPassword)));
        assert!(matches!(errors.classify("EMAIL_NOT_FOUND"), Some(WalletError::AccountNotFound)));
        assert!(matches!(errors.classify("INVALID_EMAIL"), Some(WalletError::AccountNotFound)));
        assert!(matches!(
            errors.classify("The email address is badly formatted."),
            Some(WalletError::AccountNotFound)
        ));
        assert!(errors.classify("TOO_MANY_ATTEMPTS_TRY_LATER").is_none());
    }
}
