//! Atomic swap payloads and their pre-flight checks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::{Result, WalletError};

/// Most additional payments a swap-by-id may carry.
pub const MAX_ADDITIONAL_PAYMENTS: usize = 2;

/// One leg of a swap offer: what is given (`token_id`/`sn`/`amount`, base
/// currency when `token_id` is absent) for what is wanted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sn: Option<u64>,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wanted_token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wanted_sn: Option<u64>,
    pub wanted_amount: f64,
}

impl SwapOption {
    fn reject(index: usize, reason: &str) -> WalletError {
        WalletError::InvalidSwapOption {
            index,
            reason: reason.to_string(),
        }
    }

    pub fn validate(&self, index: usize) -> Result<()> {
        if self.token_id.is_none() && self.wanted_token_id.is_none() {
            return Err(Self::reject(index, "either tokenId or wantedTokenId is required"));
        }
        if self.sn.is_some() && self.token_id.is_none() {
            return Err(Self::reject(index, "sn given without tokenId"));
        }
        if self.wanted_sn.is_some() && self.wanted_token_id.is_none() {
            return Err(Self::reject(index, "wantedSn given without wantedTokenId"));
        }
        if !is_positive(self.amount) {
            return Err(Self::reject(index, "amount must be greater than zero"));
        }
        if !is_positive(self.wanted_amount) {
            return Err(Self::reject(index, "wantedAmount must be greater than zero"));
        }
        Ok(())
    }
}

fn is_positive(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Check an offer before any network call.
pub fn validate_options(options: &[SwapOption]) -> Result<()> {
    if options.is_empty() {
        return Err(WalletError::EmptyOptionList);
    }
    options
        .iter()
        .enumerate()
        .try_for_each(|(index, option)| option.validate(index))
}

/// Extra base-currency output attached when accepting a swap by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalPayment {
    pub to: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

impl AdditionalPayment {
    pub fn new(to: impl Into<String>, amount: f64) -> Self {
        Self {
            to: to.into(),
            amount,
            token_id: None,
        }
    }
}

pub fn validate_payments(payments: &[AdditionalPayment]) -> Result<()> {
    if payments.len() > MAX_ADDITIONAL_PAYMENTS {
        return Err(WalletError::InvalidPayment(format!(
            "at most {} additional payments are allowed, got {}",
            MAX_ADDITIONAL_PAYMENTS,
            payments.len()
        )));
    }
    if let Some(payment) = payments.iter().find(|p| p.token_id.is_some()) {
        return Err(WalletError::InvalidPayment(format!(
            "payment to {} must be in base currency, not a token",
            payment.to
        )));
    }
    if let Some(payment) = payments.iter().find(|p| !is_positive(p.amount)) {
        return Err(WalletError::InvalidPayment(format!(
            "payment to {} must be greater than zero",
            payment.to
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwapWithIdBody<'a> {
    pub swap_id: &'a str,
    pub additional_payments: &'a [AdditionalPayment],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SwapHexesBody<'a> {
    pub swap_hexes: &'a [String],
}

/// Signed partial transactions produced by `offer`, one per option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapOffers {
    #[serde(default)]
    pub contents: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapResult {
    #[serde(default, rename = "txIds", alias = "txids", alias = "txid")]
    pub txids: Vec<String>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Decoded terms of a swap hex, as reported by `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInspection {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub sn: Option<u64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub wanted_token_id: Option<String>,
    #[serde(default)]
    pub wanted_amount: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
