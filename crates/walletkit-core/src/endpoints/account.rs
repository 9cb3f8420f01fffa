use super::{CURRENCY, LIMIT, NEXT_PAGE_TOKEN, SATOSHIS};
use crate::api::{ApiRequest, ErrorMap, Result, WalletError};
use crate::auth::Session;
use crate::models::{CurrencyConversion, Leaderboard, LeaderboardQuery, UserProfile};

impl Session {
    /// Fetch the account profile. Date fields are returned as `DateTime<Utc>`.
    pub async fn user_profile(&mut self) -> Result<UserProfile> {
        let request = ApiRequest::get("/v1/user");
        self.call(request, ErrorMap::new()).await?.take_field("userDetails")
    }

    pub async fn leaderboard(&mut self, query: &LeaderboardQuery) -> Result<Leaderboard> {
        let request = ApiRequest::get("/v1/leaderboard")
            .optional_header(NEXT_PAGE_TOKEN, query.next_page_token.as_deref())
            .optional_header(LIMIT, query.limit);
        let errors = ErrorMap::new()
            .exact("No leaderboard data found", |_| WalletError::EmptyLeaderboard)
            .invalid_page_token();

        self.call(request, errors).await?.into_payload()
    }

    /// Convert an amount of satoshis into a fiat currency (e.g. "USD").
    pub async fn currency_conversion(&mut self, satoshis: u64, currency: &str) -> Result<CurrencyConversion> {
        let request = ApiRequest::get("/v1/currencyConversion")
            .header(SATOSHIS, satoshis)
            .header(CURRENCY, currency);
        let errors = ErrorMap::new().unsupported_currency();

        self.call(request, errors).await?.into_payload()
    }
}
