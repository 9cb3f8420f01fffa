use thiserror::Error;

/// Every failure an operation can surface.
///
/// Credential and domain errors are terminal: the executor returns them on
/// the first matching response. Transport failures and unmatched non-success
/// statuses are retried and only reach the caller as `MaxAttemptsReached`.
#[derive(Error, Debug)]
pub enum WalletError {
    // ----- credentials -----
    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Account not found")]
    AccountNotFound,

    // ----- retry budget -----
    #[error("Maximum attempts reached after {attempts} tries")]
    MaxAttemptsReached { attempts: u32 },

    // ----- domain errors reported by the service -----
    #[error("Wallet does not exist: {0}")]
    NonExistentWallet(String),

    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    #[error("Invalid token id: {0}")]
    InvalidTokenId(String),

    #[error("Invalid wallet type")]
    InvalidWalletType,

    #[error("Invalid paymail: {0}")]
    InvalidPaymail(String),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Invalid mnemonic")]
    InvalidMnemonic,

    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Invalid swap offer: {0}")]
    InvalidSwapOffer(String),

    #[error("Invalid pagination token")]
    InvalidPageToken,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Leaderboard is empty")]
    EmptyLeaderboard,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    // ----- pre-flight validation -----
    #[error("Option list is empty")]
    EmptyOptionList,

    #[error("Invalid swap option at index {index}: {reason}")]
    InvalidSwapOption { index: usize, reason: String },

    #[error("Invalid additional payment: {0}")]
    InvalidPayment(String),

    // ----- transport -----
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid header value for {name}")]
    InvalidHeader { name: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Maximum length for response bodies embedded in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl WalletError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub(crate) fn invalid_response(body: &str) -> Self {
        WalletError::InvalidResponse(Self::truncate_body(body))
    }

    /// Whether the error came from the credential exchange itself.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            WalletError::IncorrectPassword | WalletError::AccountNotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
