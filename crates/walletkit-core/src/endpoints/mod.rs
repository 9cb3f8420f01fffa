//! Endpoint operations, grouped by area, as methods on `Session`.
//!
//! Every operation follows the same shape: validate its input without
//! touching the network, build an `ApiRequest` and an `ErrorMap`, hand both
//! to `Session::call`, then shape the envelope payload into a model type.

mod account;
mod funds;
mod swap;
mod token;
mod wallet;

// Selector header names, as the service spells them
const WALLET_ID: &str = "walletID";
const WALLET_TITLE: &str = "walletTitle";
const WALLET_LOGO: &str = "walletLogo";
const PAYMAIL_ACTIVATE: &str = "paymailActivate";
const WALLET_TYPE: &str = "type";
const CURRENCY: &str = "currency";
const TOKEN_ID: &str = "tokenId";
const SYMBOL: &str = "symbol";
const NEXT_PAGE_TOKEN: &str = "nextPageToken";
const MAX_RESULTS: &str = "maxResults";
const LIMIT: &str = "limit";
const PROTOCOL: &str = "protocol";
const SATOSHIS: &str = "satoshis";
