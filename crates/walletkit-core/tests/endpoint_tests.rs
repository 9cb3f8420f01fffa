mod common;

use std::time::Duration;

use chrono::{Datelike, TimeZone, Utc};
use common::{config, login_mock, ok, envelope, request_count, requests_to, server_error, session, EMAIL, PASSWORD};
use serde_json::json;
use walletkit_core::models::{AdditionalPayment, BalanceQuery, CreateWalletOptions, SwapOption, Transfer, WalletType};
use walletkit_core::{authenticate_with, WalletError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer};

fn token_for_base(amount: f64) -> SwapOption {
    SwapOption {
        token_id: Some("tok-abc".to_string()),
        amount,
        wanted_amount: 0.001,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_balance_sends_token_and_selectors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/balance"))
        .and(header("authToken", "tok-1"))
        .and(header("walletID", "w-1"))
        .and(header("type", "ACCESS"))
        .respond_with(ok(json!({
            "status": "success",
            "msg": "",
            "totalBalance": {"currency": "USD", "balance": 1.5},
            "coins": [
                {"protocol": "BSV", "balance": 0.25},
                {"protocol": "STAS", "balance": 10.0, "tokenId": "tok-abc", "symbol": "ABC", "sn": [1, 2]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let query = BalanceQuery {
        wallet_id: Some("w-1".to_string()),
        wallet_type: Some(WalletType::Access),
        ..Default::default()
    };
    let balance = session.balance(&query).await?;

    assert_eq!(balance.coins.len(), 2);
    assert_eq!(balance.base_coin().map(|c| c.balance), Some(0.25));
    assert_eq!(balance.tokens().count(), 1);
    assert_eq!(session.retries_remaining(), Some(5));
    Ok(())
}

#[tokio::test]
async fn test_redeem_exhausts_budget_on_persistent_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/redeem"))
        .respond_with(server_error())
        .expect(3)
        .mount(&server)
        .await;

    let mut session = session(&server, 3).await;
    let err = session.redeem_token("tok-abc", 1.0, None, None).await.unwrap_err();

    assert!(matches!(err, WalletError::MaxAttemptsReached { attempts: 3 }));
    assert_eq!(session.retries_remaining(), Some(0));
}

#[tokio::test]
async fn test_redeem_body_uses_data_array() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/redeem"))
        .and(body_json(json!({"dataArray": [{"tokenId": "tok-abc", "amount": 2.0, "sn": 7}]})))
        .respond_with(ok(json!({"status": "success", "msg": "", "txIds": ["tx-9"]})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 3).await;
    let result = session.redeem_token("tok-abc", 2.0, Some(7), None).await?;
    assert_eq!(result.txids, vec!["tx-9".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_success_on_last_allowed_attempt() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/wallets"))
        .respond_with(server_error())
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/wallets"))
        .respond_with(ok(json!({
            "status": "success",
            "msg": "",
            "wallets": [
                {"walletID": "00000000-0000-0000-0000-000000000000", "walletTitle": "default"},
                {"walletID": "w-2", "walletTitle": "savings", "walletType": "STANDARD"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 4).await;
    let wallets = session.wallets().await?;

    assert_eq!(wallets.len(), 2);
    assert_eq!(wallets[1].display_title(), "savings");
    assert_eq!(session.retries_remaining(), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_missing_wallet_with_ok_status_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/address"))
        .respond_with(ok(json!({"status": "error", "msg": "Error while syncing with walletId w-404"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let err = session.address(Some("w-404")).await.unwrap_err();
    assert!(matches!(err, WalletError::NonExistentWallet(ref id) if id == "w-404"));
}

#[tokio::test]
async fn test_insufficient_balance_with_error_status_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .respond_with(envelope(500, json!({"status": "error", "msg": "Insufficient funds for tokenId : tok-abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let transfers = [Transfer::token("bob@wallet.example", "tok-abc", 5.0)];
    let err = session.transfer(&transfers, None).await.unwrap_err();

    assert!(matches!(err, WalletError::InsufficientBalance(_)));
    assert_eq!(session.retries_remaining(), Some(5));
}

#[tokio::test]
async fn test_empty_transfer_makes_no_request() {
    let server = MockServer::start().await;
    let mut session = session(&server, 5).await;

    let err = session.transfer(&[], None).await.unwrap_err();
    assert!(matches!(err, WalletError::EmptyOptionList));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_invalid_offers_make_no_request() {
    let server = MockServer::start().await;
    let mut session = session(&server, 5).await;

    let cases = vec![
        vec![],
        vec![SwapOption {
            amount: 1.0,
            wanted_amount: 1.0,
            ..Default::default()
        }],
        vec![SwapOption {
            sn: Some(3),
            wanted_token_id: Some("tok-abc".to_string()),
            amount: 1.0,
            wanted_amount: 1.0,
            ..Default::default()
        }],
        vec![token_for_base(1.0), token_for_base(0.0)],
    ];

    for options in cases {
        assert!(session.offer(&options, None).await.is_err());
    }
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_offer_reports_failing_index() {
    let server = MockServer::start().await;
    let mut session = session(&server, 5).await;

    let options = [token_for_base(1.0), token_for_base(-2.0)];
    let err = session.offer(&options, None).await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidSwapOption { index: 1, .. }));
}

#[tokio::test]
async fn test_offer_returns_hexes() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/offer"))
        .and(body_json(json!({"dataArray": [{"tokenId": "tok-abc", "amount": 1.0, "wantedAmount": 0.001}]})))
        .respond_with(ok(json!({"status": "success", "msg": "", "contents": ["0100beef"]})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let offers = session.offer(&[token_for_base(1.0)], None).await?;
    assert_eq!(offers.contents, vec!["0100beef".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_swap_with_id_rejects_bad_payments() {
    let server = MockServer::start().await;
    let mut session = session(&server, 5).await;

    let three = [
        AdditionalPayment::new("a@wallet.example", 0.1),
        AdditionalPayment::new("b@wallet.example", 0.1),
        AdditionalPayment::new("c@wallet.example", 0.1),
    ];
    let err = session.swap_with_id("swap-1", &three, None).await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidPayment(_)));

    let mut token_payment = AdditionalPayment::new("a@wallet.example", 0.1);
    token_payment.token_id = Some("tok-abc".to_string());
    let err = session.swap_with_id("swap-1", &[token_payment], None).await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidPayment(_)));

    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_swap_with_id_posts_payments() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/swapWithId"))
        .and(body_json(json!({
            "swapId": "swap-1",
            "additionalPayments": [{"to": "a@wallet.example", "amount": 0.1}]
        })))
        .respond_with(ok(json!({"status": "success", "msg": "", "txIds": ["tx-1"]})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let payments = [AdditionalPayment::new("a@wallet.example", 0.1)];
    let result = session.swap_with_id("swap-1", &payments, None).await?;
    assert_eq!(result.txids, vec!["tx-1".to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_counter_resets_between_operations() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/mnemonic"))
        .respond_with(server_error())
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/mnemonic"))
        .respond_with(ok(json!({"status": "success", "msg": "", "mnemonic": "abandon ability able"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/allAddresses"))
        .respond_with(server_error())
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/allAddresses"))
        .respond_with(ok(json!({"status": "success", "msg": "", "addresses": ["1abc", "1def"]})))
        .mount(&server)
        .await;

    // Each operation needs three attempts; a shared counter would run out
    let mut session = session(&server, 3).await;
    let mnemonic = session.mnemonic(None).await?;
    assert_eq!(mnemonic.mnemonic, "abandon ability able");
    assert_eq!(session.retries_remaining(), Some(1));

    let addresses = session.all_addresses(None).await?;
    assert_eq!(addresses.addresses.len(), 2);
    assert_eq!(session.retries_remaining(), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_timeout_is_retried() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    login_mock("tok-1", 1).mount(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/address"))
        .respond_with(
            ok(json!({"status": "success", "msg": "", "address": "1slow"})).set_delay(Duration::from_secs(2)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/address"))
        .respond_with(ok(json!({"status": "success", "msg": "", "address": "1fast"})))
        .mount(&server)
        .await;

    let config = config(&server, 3).with_request_timeout(Duration::from_millis(300));
    let mut session = authenticate_with(config, EMAIL, PASSWORD).await?;
    let info = session.address(None).await?;

    assert_eq!(info.address, "1fast");
    assert_eq!(requests_to(&server, "/v1/address").await, 2);
    Ok(())
}

#[tokio::test]
async fn test_user_profile_dates_are_parsed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ok(json!({
            "status": "success",
            "msg": "",
            "userDetails": {
                "uid": "u-1",
                "email": EMAIL,
                "displayName": "",
                "creationTime": "Tue, 01 Mar 2022 10:00:00 GMT",
                "lastSignInTime": 1_700_000_000_000_i64,
                "dateOfBirth": {"_seconds": 631_152_000, "_nanoseconds": 0},
                "verifiedAt": "2023-05-04"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let profile = session.user_profile().await?;

    assert_eq!(profile.user_id.as_deref(), Some("u-1"));
    assert_eq!(profile.display_name_or_email(), EMAIL);
    assert_eq!(profile.created_at, Utc.with_ymd_and_hms(2022, 3, 1, 10, 0, 0).single());
    assert_eq!(profile.last_sign_in_at.map(|d| d.timestamp()), Some(1_700_000_000));
    assert_eq!(profile.date_of_birth.map(|d| d.year()), Some(1990));
    assert_eq!(profile.timestamp("verifiedAt").map(|d| d.month()), Some(5));
    Ok(())
}

#[tokio::test]
async fn test_create_wallet_headers() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/createWallet"))
        .and(header("walletTitle", "savings"))
        .and(header("paymailActivate", "true"))
        .respond_with(ok(json!({"status": "success", "msg": "", "walletID": "w-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let options = CreateWalletOptions {
        paymail_activate: true,
        ..Default::default()
    };
    let wallet = session.create_wallet("savings", &options).await?;
    assert_eq!(wallet.wallet_id, "w-2");
    Ok(())
}

#[tokio::test]
async fn test_unsupported_currency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencyConversion"))
        .and(header("satoshis", "100000"))
        .respond_with(envelope(400, json!({"status": "error", "msg": "Unsupported currency XYZ"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let err = session.currency_conversion(100_000, "XYZ").await.unwrap_err();
    assert!(matches!(err, WalletError::UnsupportedCurrency(_)));
}

#[tokio::test]
async fn test_blank_mnemonic_is_rejected_locally() {
    let server = MockServer::start().await;
    let mut session = session(&server, 5).await;

    let err = session.import_wallet("restored", "   ").await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidMnemonic));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_out_of_range_profile_dates_become_none() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ok(json!({
            "status": "success",
            "msg": "",
            "userDetails": {
                "email": EMAIL,
                "createdAt": i64::MIN,
                "lastSignInTime": "-9223372036854775808"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = session(&server, 5).await;
    let profile = session.user_profile().await?;

    assert!(profile.created_at.is_none());
    assert!(profile.last_sign_in_at.is_none());
    assert_eq!(profile.email.as_deref(), Some(EMAIL));
    Ok(())
}
