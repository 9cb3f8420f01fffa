use tracing::debug;

use super::{CURRENCY, LIMIT, MAX_RESULTS, NEXT_PAGE_TOKEN, PROTOCOL, SYMBOL, TOKEN_ID, WALLET_ID, WALLET_TYPE};
use crate::api::{ApiRequest, ErrorMap, Result, WalletError};
use crate::auth::Session;
use crate::models::transfer::DataArray;
use crate::models::{
    Balance, BalanceQuery, History, HistoryQuery, RawTransactions, SweepResult, Transfer,
    TransferResult,
};

impl Session {
    /// Fetch the balance of a wallet (the default wallet when no id is given).
    pub async fn balance(&mut self, query: &BalanceQuery) -> Result<Balance> {
        let request = ApiRequest::get("/v2/balance")
            .optional_header(WALLET_ID, query.wallet_id.as_deref())
            .optional_header(CURRENCY, query.currency.as_deref())
            .optional_header(WALLET_TYPE, query.wallet_type)
            .optional_header(TOKEN_ID, query.token_id.as_deref())
            .optional_header(SYMBOL, query.symbol.as_deref())
            .optional_header(NEXT_PAGE_TOKEN, query.next_page_token.as_deref())
            .optional_header(MAX_RESULTS, query.max_results);
        let errors = ErrorMap::new()
            .missing_wallet()
            .unsupported_currency()
            .invalid_page_token();

        let balance: Balance = self.call(request, errors).await?.into_payload()?;
        debug!(coins = balance.coins.len(), "Balance fetched");
        Ok(balance)
    }

    /// Fetch one page of transaction history.
    pub async fn history(&mut self, query: &HistoryQuery) -> Result<History> {
        let request = ApiRequest::get("/v2/history")
            .optional_header(WALLET_ID, query.wallet_id.as_deref())
            .optional_header(NEXT_PAGE_TOKEN, query.next_page_token.as_deref())
            .optional_header(LIMIT, query.limit)
            .optional_header(PROTOCOL, query.protocol.as_deref());
        let errors = ErrorMap::new().missing_wallet().invalid_page_token();

        self.call(request, errors).await?.into_payload()
    }

    /// Send base currency and/or tokens to one or more recipients.
    pub async fn transfer(&mut self, transfers: &[Transfer], wallet_id: Option<&str>) -> Result<TransferResult> {
        if transfers.is_empty() {
            return Err(WalletError::EmptyOptionList);
        }

        let request = ApiRequest::post("/v1/send", &DataArray { data_array: transfers })?
            .optional_header(WALLET_ID, wallet_id);
        self.call(request, transfer_errors()).await?.into_payload()
    }

    /// Build and sign the transfer without broadcasting it.
    pub async fn raw_tx(&mut self, transfers: &[Transfer], wallet_id: Option<&str>) -> Result<RawTransactions> {
        if transfers.is_empty() {
            return Err(WalletError::EmptyOptionList);
        }

        let request = ApiRequest::post("/v1/rawtx", &DataArray { data_array: transfers })?
            .optional_header(WALLET_ID, wallet_id);
        self.call(request, transfer_errors()).await?.into_payload()
    }

    /// Move all funds controlled by a private key (WIF) into the wallet.
    pub async fn sweep(&mut self, private_key: &str, wallet_id: Option<&str>) -> Result<SweepResult> {
        let body = serde_json::json!({ "privateKey": private_key });
        let request = ApiRequest::post("/v1/sweep", &body)?.optional_header(WALLET_ID, wallet_id);
        let errors = ErrorMap::new()
            .missing_wallet()
            .exact("Invalid private key", |_| WalletError::InvalidPrivateKey);

        self.call(request, errors).await?.into_payload()
    }
}

fn transfer_errors() -> ErrorMap {
    ErrorMap::new()
        .missing_wallet()
        .insufficient_balance()
        .invalid_token_id()
}
