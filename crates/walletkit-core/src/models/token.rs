//! Token issue, redeem and lookup payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Details for a new token contract. `image` is the logo URI the service
/// validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssue {
    pub name: String,
    pub protocol: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub token_supply: u64,
    pub decimals: u32,
    pub sats_per_token: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splitable: Option<bool>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssueResult {
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default, rename = "txIds", alias = "txids", alias = "txid")]
    pub txids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Redeem<'a> {
    pub token_id: &'a str,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sn: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedeemResult {
    #[serde(default, rename = "txIds", alias = "txids", alias = "txid")]
    pub txids: Vec<String>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Token contract as returned by the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    #[serde(default, alias = "id")]
    pub token_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub total_supply: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
