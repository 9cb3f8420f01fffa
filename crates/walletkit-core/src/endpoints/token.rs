use tracing::info;

use super::WALLET_ID;
use crate::api::{ApiRequest, ErrorMap, Result, WalletError};
use crate::auth::Session;
use crate::models::token::Redeem;
use crate::models::transfer::DataArray;
use crate::models::{RedeemResult, TokenDetails, TokenIssue, TokenIssueResult};

impl Session {
    /// Issue a new token contract from the wallet.
    pub async fn issue_token(&mut self, details: &TokenIssue, wallet_id: Option<&str>) -> Result<TokenIssueResult> {
        let request = ApiRequest::post("/v1/issue", details)?.optional_header(WALLET_ID, wallet_id);
        let errors = ErrorMap::new()
            .missing_wallet()
            .prefix("Invalid URI", |msg| WalletError::InvalidUri(msg.to_string()))
            .prefix("Invalid logo url", |msg| WalletError::InvalidUri(msg.to_string()));

        let issued: TokenIssueResult = self.call(request, errors).await?.into_payload()?;
        info!(token_id = ?issued.token_id, "Token issued");
        Ok(issued)
    }

    /// Send `amount` of a token back to its issuer. `sn` selects a single
    /// serial number of a non-fungible token.
    pub async fn redeem_token(
        &mut self,
        token_id: &str,
        amount: f64,
        sn: Option<u64>,
        wallet_id: Option<&str>,
    ) -> Result<RedeemResult> {
        let redeem = [Redeem { token_id, amount, sn }];
        let request = ApiRequest::post("/v1/redeem", &DataArray { data_array: &redeem })?
            .optional_header(WALLET_ID, wallet_id);
        let errors = ErrorMap::new()
            .missing_wallet()
            .insufficient_balance()
            .token_not_found();

        self.call(request, errors).await?.into_payload()
    }

    /// Look up a token contract by id. The id becomes a path segment, so
    /// only ASCII alphanumerics, `-` and `_` are accepted.
    pub async fn token_details(&mut self, token_id: &str) -> Result<TokenDetails> {
        if !is_path_safe(token_id) {
            return Err(WalletError::InvalidTokenId(token_id.to_string()));
        }

        let request = ApiRequest::get(format!("/v1/token/{}", token_id));
        let errors = ErrorMap::new().invalid_token_id().token_not_found();
        self.call(request, errors).await?.take_field("token")
    }
}

fn is_path_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
