//! Ordered message rules that turn a service `msg` into a typed error.
//!
//! The service reports business failures as free-form strings, sometimes
//! with a 200 status and sometimes without, so every operation carries its
//! own map and the executor consults it before looking at the status.

use super::error::WalletError;

const WALLET_SYNC_PREFIX: &str = "Error while syncing with walletId";
const INSUFFICIENT_BALANCE: &str = "Insufficient Balance";
const INSUFFICIENT_TOKEN_FUNDS_PREFIX: &str = "Insufficient funds for tokenId : ";
const TOKEN_NOT_FOUND_PREFIX: &str = "No token found with tokenId : ";

#[derive(Debug, Clone)]
enum Pattern {
    Exact(String),
    Prefix(String),
}

impl Pattern {
    fn matches(&self, msg: &str) -> bool {
        match self {
            Pattern::Exact(expected) => msg == expected,
            Pattern::Prefix(prefix) => msg.starts_with(prefix.as_str()),
        }
    }
}

type ErrorFactory = fn(&str) -> WalletError;

#[derive(Clone, Default)]
pub struct ErrorMap {
    rules: Vec<(Pattern, ErrorFactory)>,
}

impl std::fmt::Debug for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|(pattern, _)| pattern))
            .finish()
    }
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exact(mut self, msg: impl Into<String>, factory: ErrorFactory) -> Self {
        self.rules.push((Pattern::Exact(msg.into()), factory));
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>, factory: ErrorFactory) -> Self {
        self.rules.push((Pattern::Prefix(prefix.into()), factory));
        self
    }

    /// First rule matching `msg`, in insertion order.
    pub fn classify(&self, msg: &str) -> Option<WalletError> {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(msg))
            .map(|(_, factory)| factory(msg))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ===== Shared rule groups =====

    /// `Error while syncing with walletId: <id>`. Matched by prefix so the
    /// rule holds whether or not the caller named a wallet.
    pub fn missing_wallet(self) -> Self {
        self.prefix(WALLET_SYNC_PREFIX, |msg| {
            let id = msg
                .trim_start_matches(WALLET_SYNC_PREFIX)
                .trim_start_matches(':')
                .trim();
            WalletError::NonExistentWallet(id.to_string())
        })
    }

    pub fn insufficient_balance(self) -> Self {
        self.exact(INSUFFICIENT_BALANCE, |_| {
            WalletError::InsufficientBalance("base currency".to_string())
        })
        .prefix(INSUFFICIENT_TOKEN_FUNDS_PREFIX, |msg| {
            WalletError::InsufficientBalance(
                msg.trim_start_matches(INSUFFICIENT_TOKEN_FUNDS_PREFIX).trim().to_string(),
            )
        })
    }

    pub fn token_not_found(self) -> Self {
        self.prefix(TOKEN_NOT_FOUND_PREFIX, |msg| {
            WalletError::TokenNotFound(
                msg.trim_start_matches(TOKEN_NOT_FOUND_PREFIX).trim().to_string(),
            )
        })
    }

    pub fn invalid_token_id(self) -> Self {
        self.exact("Invalid token id", |msg| WalletError::InvalidTokenId(msg.to_string()))
            .prefix("Invalid tokenId", |msg| WalletError::InvalidTokenId(msg.to_string()))
    }

    pub fn invalid_swap_offer(self) -> Self {
        self.exact("Invalid swap offer", |msg| WalletError::InvalidSwapOffer(msg.to_string()))
            .prefix("Unable to parse swap hex", |msg| {
                WalletError::InvalidSwapOffer(msg.to_string())
            })
    }

    pub fn invalid_page_token(self) -> Self {
        self.exact("Invalid nextPageToken", |_| WalletError::InvalidPageToken)
    }

    pub fn unsupported_currency(self) -> Self {
        self.prefix("Unsupported currency", |msg| {
            WalletError::UnsupportedCurrency(msg.to_string())
        })
    }
}
