//! Data models for wallet service payloads.
//!
//! Request types serialize to the service's camelCase wire format; response
//! types keep unknown fields in an `extra` map so new service fields never
//! break parsing.
//!
//! - `wallet`: wallet creation, listing, addresses, mnemonic, paymail
//! - `balance`: balances and transaction history
//! - `transfer`: transfers, raw transactions, sweeps
//! - `swap`: atomic swap offers, acceptance, inspection
//! - `token`: token issue, redeem and lookup
//! - `account`: user profile, leaderboard, currency conversion

pub mod account;
pub mod balance;
pub mod swap;
pub mod token;
pub mod transfer;
pub mod wallet;

pub use account::{CurrencyConversion, Leaderboard, LeaderboardEntry, LeaderboardQuery, UserProfile};
pub use balance::{Balance, BalanceQuery, Coin, History, HistoryEntry, HistoryQuery};
pub use swap::{AdditionalPayment, SwapInspection, SwapOffers, SwapOption, SwapResult};
pub use token::{RedeemResult, TokenIssueResult, TokenDetails, TokenIssue};
pub use transfer::{RawTransactions, SweepResult, Transfer, TransferResult};
pub use wallet::{
    AddressInfo, AllAddresses, CreateWalletOptions, CreatedWallet, Mnemonic, PaymailUpdate,
    WalletSummary, WalletType,
};
