use std::fmt;

use chrono::{DateTime, Duration, Utc};
use reqwest::header::HeaderMap;
use tracing::debug;

use super::credentials::Credentials;
use super::login::{self, IssuedToken};
use crate::api::executor::{self, Retries};
use crate::api::request::authenticated_headers;
use crate::api::{ApiClient, ApiRequest, EnvelopeData, ErrorMap, Result};
use crate::config::ClientConfig;

/// Authenticated handle for one credential pair.
///
/// Every operation takes `&mut self`: the retry counter and token rotation
/// are per-operation state, so a session is never shared between two
/// in-flight operations. Wrap it in a `tokio::sync::Mutex` to share it
/// across tasks.
pub struct Session {
    client: ApiClient,
    credentials: Credentials,
    token: String,
    token_issued_at: DateTime<Utc>,
    token_ttl: Duration,
    retry_budget: u32,
    retry_delay: std::time::Duration,
    retries: Option<Retries>,
    headers: HeaderMap,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.client.base_url())
            .field("credentials", &self.credentials)
            .field("token", &"<redacted>")
            .field("token_issued_at", &self.token_issued_at)
            .field("retry_budget", &self.retry_budget)
            .field("retries_remaining", &self.retries_remaining())
            .finish()
    }
}

impl Session {
    pub(crate) fn new(
        client: ApiClient,
        credentials: Credentials,
        issued: IssuedToken,
        config: &ClientConfig,
    ) -> Result<Self> {
        let headers = authenticated_headers(&issued.token)?;
        Ok(Self {
            client,
            credentials,
            token: issued.token,
            token_issued_at: issued.issued_at,
            token_ttl: config.token_ttl,
            retry_budget: config.retries,
            retry_delay: config.retry_delay,
            retries: None,
            headers,
        })
    }

    /// Current bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    pub fn token_issued_at(&self) -> DateTime<Utc> {
        self.token_issued_at
    }

    pub fn token_age(&self) -> Duration {
        Utc::now() - self.token_issued_at
    }

    /// A token is fresh while its age is strictly below the window.
    pub fn is_token_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }

    fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now - self.token_issued_at < self.token_ttl
    }

    /// Force a token refresh before the next request.
    pub fn invalidate_token(&mut self) {
        self.token_issued_at = Utc::now() - self.token_ttl;
    }

    pub fn retry_budget(&self) -> u32 {
        self.retry_budget
    }

    /// Attempts left in the current operation; `None` before the first one.
    pub fn retries_remaining(&self) -> Option<u32> {
        self.retries.map(|r| r.remaining())
    }

    /// Start a logical operation with a full attempt budget.
    fn begin_operation(&mut self) -> Retries {
        let retries = Retries::new(self.retry_budget, self.retry_delay);
        self.retries = Some(retries);
        retries
    }

    /// Refresh the token if it is stale, as a standalone operation with its
    /// own attempt budget.
    pub async fn ensure_authenticated(&mut self) -> Result<()> {
        let mut retries = self.begin_operation();
        let result = self.refresh_if_stale(&mut retries).await;
        self.retries = Some(retries);
        result
    }

    /// Failed exchanges are charged to the running operation's budget.
    async fn refresh_if_stale(&mut self, retries: &mut Retries) -> Result<()> {
        if self.is_token_fresh() {
            return Ok(());
        }

        debug!(
            email = self.credentials.email(),
            age_secs = self.token_age().num_seconds(),
            "Token stale, re-authenticating"
        );

        let issued = login::login(&self.client, &self.credentials, retries).await?;
        self.rotate_token(issued)
    }

    fn rotate_token(&mut self, issued: IssuedToken) -> Result<()> {
        self.headers = authenticated_headers(&issued.token)?;
        self.token = issued.token;
        self.token_issued_at = issued.issued_at;
        Ok(())
    }

    /// Run one logical operation: reset the budget, make sure the token is
    /// fresh, then execute the request under what is left of the budget.
    pub(crate) async fn call(&mut self, request: ApiRequest, errors: ErrorMap) -> Result<EnvelopeData> {
        let mut retries = self.begin_operation();
        let result = match self.refresh_if_stale(&mut retries).await {
            Ok(()) => {
                executor::execute(&self.client, &self.headers, &request, &errors, &mut retries).await
            }
            Err(err) => Err(err),
        };
        self.retries = Some(retries);
        result
    }
}
