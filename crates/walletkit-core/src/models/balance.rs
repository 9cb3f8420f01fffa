//! Balance and history payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::wallet::WalletType;

/// Selector headers for `Session::balance`. All optional.
#[derive(Debug, Clone, Default)]
pub struct BalanceQuery {
    pub wallet_id: Option<String>,
    pub currency: Option<String>,
    pub wallet_type: Option<WalletType>,
    pub token_id: Option<String>,
    pub symbol: Option<String>,
    pub next_page_token: Option<String>,
    pub max_results: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(default)]
    pub total_balance: Option<Value>,
    #[serde(default)]
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub next_page_token: Option<Value>,
}

impl Balance {
    /// The base-currency entry, if present.
    pub fn base_coin(&self) -> Option<&Coin> {
        self.coins.iter().find(|coin| coin.token_id.is_none())
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter().filter(|coin| coin.token_id.is_some())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sn: Vec<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Selector headers for `Session::history`.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub wallet_id: Option<String>,
    pub next_page_token: Option<String>,
    pub limit: Option<u32>,
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[serde(default)]
    pub histories: Vec<HistoryEntry>,
    #[serde(default)]
    pub next_page_token: Option<Value>,
}

impl History {
    pub fn has_more(&self) -> bool {
        matches!(&self.next_page_token, Some(token) if !token.is_null())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(alias = "txId")]
    pub txid: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Vec<Value>,
    #[serde(default)]
    pub balance_change: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance() {
        let json = r#"{
            "totalBalance": {"currency": "USD", "balance": 1.5},
            "coins": [
                {"protocol": "BSV", "balance": 0.01},
                {"protocol": "STAS", "balance": 3, "tokenId": "abc-123", "symbol": "TKN", "sn": [1, 2, 3]}
            ],
            "nextPageToken": null
        }"#;
        let balance: Balance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.coins.len(), 2);
        assert_eq!(balance.base_coin().unwrap().protocol.as_deref(), Some("BSV"));
        let tokens: Vec<_> = balance.tokens().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].sn, vec![1, 2, 3]);
    }

    #[test]
    fn test_history_pagination() {
        let json = r#"{"histories":[{"txId":"ff00","from":"1abc","to":["1def"],"balanceChange":-0.1}],"nextPageToken":7}"#;
        let history: History = serde_json::from_str(json).unwrap();
        assert_eq!(history.histories[0].txid, "ff00");
        assert!(history.has_more());

        let last: History = serde_json::from_str(r#"{"histories":[],"nextPageToken":null}"#).unwrap();
        assert!(!last.has_more());
    }
}
