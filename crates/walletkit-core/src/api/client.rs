//! Thin transport over `reqwest`: one call in, status and body out.
//!
//! Interpretation of the body (domain errors, retries) lives in the
//! executor; this layer only knows how to reach the host.

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::error::Result;
use super::request::ApiRequest;
use crate::config::ClientConfig;

/// HTTP client bound to one wallet service host.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Raw outcome of a single HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request. Transport failures (connect, timeout, body read)
    /// come back as `Err`; any HTTP status comes back as `Ok`.
    pub async fn send(&self, request: &ApiRequest, headers: HeaderMap) -> Result<RawResponse> {
        let url = self.url(&request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(headers);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(method = %request.method, path = %request.path, status = %status, "Response received");

        Ok(RawResponse { status, body })
    }
}
