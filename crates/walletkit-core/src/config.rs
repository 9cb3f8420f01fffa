//! Client configuration.
//!
//! Everything is passed explicitly by the caller; the library reads no
//! files and no environment variables.

use std::time::Duration;

/// Production host of the wallet service
pub const DEFAULT_BASE_URL: &str = "https://api.relysia.com";

/// Default attempt budget per logical operation.
pub const DEFAULT_RETRIES: u32 = 20;

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Tokens older than this are refreshed before the next request.
const TOKEN_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub retries: u32,
    pub token_ttl: chrono::Duration,
    /// Pause between attempts after a transient failure. Zero retries
    /// immediately.
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
            token_ttl: chrono::Duration::minutes(TOKEN_TTL_MINUTES),
            retry_delay: Duration::ZERO,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_token_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.retries, 20);
        assert_eq!(config.token_ttl, chrono::Duration::minutes(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.retry_delay.is_zero());
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
