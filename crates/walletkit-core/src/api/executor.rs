//! The retry loop every operation runs through.
//!
//! Each attempt is classified as a success, a terminal failure (domain
//! message or undecodable success body) or a transient failure. Only
//! transient failures consume the budget and trigger another attempt.

use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use super::client::{ApiClient, RawResponse};
use super::envelope::{Envelope, EnvelopeData};
use super::error::{Result, WalletError};
use super::error_map::ErrorMap;
use super::request::ApiRequest;

/// Attempt budget for one logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retries {
    budget: u32,
    remaining: u32,
    delay: Duration,
}

impl Retries {
    pub fn new(budget: u32, delay: Duration) -> Self {
        Self {
            budget,
            remaining: budget,
            delay,
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn attempts_made(&self) -> u32 {
        self.budget - self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Consume one attempt after a transient failure.
    pub fn record_failure(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn exhausted_error(&self) -> WalletError {
        WalletError::MaxAttemptsReached {
            attempts: self.budget,
        }
    }

    /// Sleep before the next attempt, if a delay is configured.
    pub async fn pause(&self) {
        if !self.delay.is_zero() && !self.is_exhausted() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Classification of one HTTP exchange.
#[derive(Debug)]
pub enum Outcome {
    Success(EnvelopeData),
    Terminal(WalletError),
    Transient(String),
}

/// Domain messages are checked before the status: the service sends them
/// with both 200 and error statuses.
pub fn classify(raw: &RawResponse, errors: &ErrorMap) -> Outcome {
    let envelope = match Envelope::parse(&raw.body) {
        Ok(envelope) => envelope,
        Err(err) if raw.status.is_success() => return Outcome::Terminal(err),
        Err(_) => return Outcome::Transient(format!("status {} with undecodable body", raw.status)),
    };

    if let Some(err) = envelope.data.message().and_then(|msg| errors.classify(msg)) {
        return Outcome::Terminal(err);
    }

    if raw.status.is_success() && envelope.reports_success() {
        Outcome::Success(envelope.data)
    } else {
        Outcome::Transient(format!(
            "status {} (envelope {:?}): {}",
            raw.status,
            envelope.status_code,
            envelope.data.message().unwrap_or_default()
        ))
    }
}

/// Run `request` until it succeeds, fails terminally, or `retries` runs out.
pub async fn execute(
    client: &ApiClient,
    base_headers: &HeaderMap,
    request: &ApiRequest,
    errors: &ErrorMap,
    retries: &mut Retries,
) -> Result<EnvelopeData> {
    let headers = request.header_map(base_headers)?;

    loop {
        if retries.is_exhausted() {
            return Err(retries.exhausted_error());
        }

        debug!(
            method = %request.method,
            path = %request.path,
            attempt = retries.attempts_made() + 1,
            budget = retries.budget(),
            "Sending request"
        );

        let reason = match client.send(request, headers.clone()).await {
            Ok(raw) => match classify(&raw, errors) {
                Outcome::Success(data) => return Ok(data),
                Outcome::Terminal(err) => return Err(err),
                Outcome::Transient(reason) => reason,
            },
            // A request that cannot be built fails identically on every attempt
            Err(WalletError::NetworkError(err)) if err.is_builder() => {
                return Err(WalletError::NetworkError(err))
            }
            Err(err) => err.to_string(),
        };

        retries.record_failure();
        warn!(
            path = %request.path,
            reason = %reason,
            remaining = retries.remaining(),
            "Transient failure"
        );
        retries.pause().await;
    }
}
