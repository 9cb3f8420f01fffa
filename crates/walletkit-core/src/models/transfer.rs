//! Transfer, raw transaction and sweep payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One output of a transfer. `to` is an address or paymail; `token_id`
/// (and optionally `sn`) turn it into a token transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub to: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sn: Option<u64>,
}

impl Transfer {
    pub fn base(to: impl Into<String>, amount: f64) -> Self {
        Self {
            to: to.into(),
            amount,
            token_id: None,
            sn: None,
        }
    }

    pub fn token(to: impl Into<String>, token_id: impl Into<String>, amount: f64) -> Self {
        Self {
            to: to.into(),
            amount,
            token_id: Some(token_id.into()),
            sn: None,
        }
    }

    pub fn with_sn(mut self, sn: u64) -> Self {
        self.sn = Some(sn);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DataArray<'a, T> {
    pub data_array: &'a [T],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    #[serde(default, rename = "txIds", alias = "txids", alias = "txid")]
    pub txids: Vec<String>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl TransferResult {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactions {
    #[serde(default)]
    pub raw_txs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResult {
    #[serde(default, rename = "txIds", alias = "txids", alias = "txid")]
    pub txids: Vec<String>,
    #[serde(default)]
    pub errors: Vec<Value>,
}
