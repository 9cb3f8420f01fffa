//! Request assembly: method, path, selector headers and JSON body.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::error::{Result, WalletError};

/// Header carrying the bearer token on authenticated calls
pub const AUTH_TOKEN_HEADER: &str = "authToken";

/// One upstream call, replayable across retries.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            headers: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    pub fn header(mut self, name: &'static str, value: impl ToString) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    /// Add a selector header only when the caller supplied a value.
    pub fn optional_header<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Merge the session's base headers with this request's own.
    pub fn header_map(&self, base: &HeaderMap) -> Result<HeaderMap> {
        let mut headers = base.clone();
        for (name, value) in &self.headers {
            let name_value = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| WalletError::InvalidHeader { name: name.to_string() })?;
            headers.insert(name_value, header_value(name, value)?);
        }
        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| WalletError::InvalidHeader {
        name: name.to_string(),
    })
}

/// Headers sent on every call, authenticated or not.
pub fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Base headers plus the bearer token. Built per session.
pub fn authenticated_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = base_headers();
    headers.insert(
        HeaderName::from_static("authtoken"),
        header_value(AUTH_TOKEN_HEADER, token)?,
    );
    Ok(headers)
}
