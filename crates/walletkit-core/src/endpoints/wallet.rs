use tracing::info;

use super::{PAYMAIL_ACTIVATE, WALLET_ID, WALLET_LOGO, WALLET_TITLE, WALLET_TYPE};
use crate::api::{ApiRequest, ErrorMap, Result, WalletError};
use crate::auth::Session;
use crate::models::{
    AddressInfo, AllAddresses, CreateWalletOptions, CreatedWallet, Mnemonic, PaymailUpdate,
    WalletSummary,
};

impl Session {
    pub async fn create_wallet(&mut self, title: &str, options: &CreateWalletOptions) -> Result<CreatedWallet> {
        let request = ApiRequest::get("/v1/createWallet")
            .header(WALLET_TITLE, title)
            .header(PAYMAIL_ACTIVATE, options.paymail_activate)
            .optional_header(WALLET_TYPE, options.wallet_type)
            .optional_header(WALLET_LOGO, options.wallet_logo.as_deref());
        let errors = ErrorMap::new().exact("Invalid wallet type", |_| WalletError::InvalidWalletType);

        let wallet: CreatedWallet = self.call(request, errors).await?.into_payload()?;
        info!(wallet_id = %wallet.wallet_id, "Wallet created");
        Ok(wallet)
    }

    /// List every wallet on the account.
    pub async fn wallets(&mut self) -> Result<Vec<WalletSummary>> {
        let request = ApiRequest::get("/v1/wallets");
        self.call(request, ErrorMap::new()).await?.take_field("wallets")
    }

    /// Current receive address and paymail of a wallet.
    pub async fn address(&mut self, wallet_id: Option<&str>) -> Result<AddressInfo> {
        let request = ApiRequest::get("/v1/address").optional_header(WALLET_ID, wallet_id);
        self.call(request, ErrorMap::new().missing_wallet()).await?.into_payload()
    }

    pub async fn all_addresses(&mut self, wallet_id: Option<&str>) -> Result<AllAddresses> {
        let request = ApiRequest::get("/v1/allAddresses").optional_header(WALLET_ID, wallet_id);
        self.call(request, ErrorMap::new().missing_wallet()).await?.into_payload()
    }

    /// Recovery phrase of a wallet.
    pub async fn mnemonic(&mut self, wallet_id: Option<&str>) -> Result<Mnemonic> {
        let request = ApiRequest::get("/v1/mnemonic").optional_header(WALLET_ID, wallet_id);
        self.call(request, ErrorMap::new().missing_wallet()).await?.into_payload()
    }

    /// Restore a wallet from its recovery phrase.
    pub async fn import_wallet(&mut self, title: &str, mnemonic: &str) -> Result<CreatedWallet> {
        if mnemonic.split_whitespace().next().is_none() {
            return Err(WalletError::InvalidMnemonic);
        }

        let body = serde_json::json!({ "walletTitle": title, "mnemonic": mnemonic });
        let request = ApiRequest::post("/v1/import", &body)?;
        let errors = ErrorMap::new()
            .exact("Invalid mnemonic", |_| WalletError::InvalidMnemonic)
            .prefix("Invalid Mnemonic", |_| WalletError::InvalidMnemonic);

        let wallet: CreatedWallet = self.call(request, errors).await?.into_payload()?;
        info!(wallet_id = %wallet.wallet_id, "Wallet imported");
        Ok(wallet)
    }

    /// Change the paymail handle of a wallet.
    pub async fn set_paymail(&mut self, paymail: &str, wallet_id: Option<&str>) -> Result<PaymailUpdate> {
        let body = serde_json::json!({ "newPaymailId": paymail });
        let request = ApiRequest::post("/v1/paymail", &body)?.optional_header(WALLET_ID, wallet_id);
        let errors = ErrorMap::new()
            .missing_wallet()
            .prefix("Invalid paymail", |msg| WalletError::InvalidPaymail(msg.to_string()));

        self.call(request, errors).await?.into_payload()
    }
}
