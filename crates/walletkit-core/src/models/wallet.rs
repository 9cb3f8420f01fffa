//! Wallet management payloads.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    #[default]
    Standard,
    Access,
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletType::Standard => write!(f, "STANDARD"),
            WalletType::Access => write!(f, "ACCESS"),
        }
    }
}

/// Options for `Session::create_wallet`.
#[derive(Debug, Clone, Default)]
pub struct CreateWalletOptions {
    pub paymail_activate: bool,
    pub wallet_type: Option<WalletType>,
    pub wallet_logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedWallet {
    #[serde(rename = "walletID", alias = "walletId")]
    pub wallet_id: String,
    #[serde(default)]
    pub paymail: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSummary {
    #[serde(rename = "walletID", alias = "walletId")]
    pub wallet_id: String,
    #[serde(rename = "walletTitle", default)]
    pub title: Option<String>,
    #[serde(rename = "walletLogo", default)]
    pub logo: Option<String>,
    #[serde(rename = "walletType", default)]
    pub wallet_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WalletSummary {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled wallet")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    #[serde(default)]
    pub paymail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllAddresses {
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(rename = "changeAddress", default)]
    pub change_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mnemonic {
    pub mnemonic: String,
}

impl Mnemonic {
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymailUpdate {
    pub paymail: String,
    #[serde(default)]
    pub address: Option<String>,
}
