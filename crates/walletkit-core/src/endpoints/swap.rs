use tracing::debug;

use super::WALLET_ID;
use crate::api::{ApiRequest, ErrorMap, Result};
use crate::auth::Session;
use crate::models::swap::{validate_options, validate_payments, SwapHexesBody, SwapWithIdBody};
use crate::models::transfer::DataArray;
use crate::models::{AdditionalPayment, SwapInspection, SwapOffers, SwapOption, SwapResult};

impl Session {
    /// Create signed swap offers, one per option.
    ///
    /// The options are validated before any request is made.
    pub async fn offer(&mut self, options: &[SwapOption], wallet_id: Option<&str>) -> Result<SwapOffers> {
        validate_options(options)?;

        let request = ApiRequest::post("/v1/offer", &DataArray { data_array: options })?
            .optional_header(WALLET_ID, wallet_id);
        let errors = ErrorMap::new()
            .missing_wallet()
            .insufficient_balance()
            .token_not_found();

        let offers: SwapOffers = self.call(request, errors).await?.into_payload()?;
        debug!(offers = offers.contents.len(), "Swap offers created");
        Ok(offers)
    }

    /// Accept swap offers by completing and broadcasting their hexes.
    pub async fn swap(&mut self, swap_hexes: &[String], wallet_id: Option<&str>) -> Result<SwapResult> {
        let request = ApiRequest::post("/v1/swap", &SwapHexesBody { swap_hexes })?
            .optional_header(WALLET_ID, wallet_id);
        self.call(request, acceptance_errors()).await?.into_payload()
    }

    /// Decode swap hexes without accepting them.
    pub async fn inspect(&mut self, swap_hexes: &[String]) -> Result<Vec<SwapInspection>> {
        let request = ApiRequest::post("/v1/inspect", &SwapHexesBody { swap_hexes })?;
        let errors = ErrorMap::new().invalid_swap_offer();
        self.call(request, errors).await?.take_field("contents")
    }

    /// Accept a stored swap offer by id, optionally paying up to two extra
    /// base-currency outputs.
    pub async fn swap_with_id(
        &mut self,
        swap_id: &str,
        additional_payments: &[AdditionalPayment],
        wallet_id: Option<&str>,
    ) -> Result<SwapResult> {
        validate_payments(additional_payments)?;

        let body = SwapWithIdBody {
            swap_id,
            additional_payments,
        };
        let request = ApiRequest::post("/v1/swapWithId", &body)?.optional_header(WALLET_ID, wallet_id);
        self.call(request, acceptance_errors()).await?.into_payload()
    }
}

fn acceptance_errors() -> ErrorMap {
    ErrorMap::new()
        .missing_wallet()
        .insufficient_balance()
        .invalid_swap_offer()
}
