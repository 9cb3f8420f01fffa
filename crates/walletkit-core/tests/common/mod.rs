#![allow(dead_code)]

use serde_json::{json, Value};
use walletkit_core::{authenticate_with, ClientConfig, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "ann@example.com";
pub const PASSWORD: &str = "correct horse";

/// Wrap `data` in the service envelope.
pub fn envelope(status: u16, data: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "statusCode": status,
        "data": data,
    }))
}

pub fn ok(data: Value) -> ResponseTemplate {
    envelope(200, data)
}

pub fn server_error() -> ResponseTemplate {
    envelope(500, json!({"status": "error", "msg": "Internal server error"}))
}

pub fn config(server: &MockServer, retries: u32) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_retries(retries)
}

/// Login mock answering with `token`, limited to `times` matches.
pub fn login_mock(token: &str, times: u64) -> Mock {
    Mock::given(method("POST"))
        .and(path("/v1/auth"))
        .respond_with(ok(json!({"status": "success", "msg": "", "token": token})))
        .up_to_n_times(times)
}

/// Authenticated session against `server` whose token never goes stale
/// during a test.
pub async fn session(server: &MockServer, retries: u32) -> Session {
    login_mock("tok-1", 1).mount(server).await;
    authenticate_with(config(server, retries), EMAIL, PASSWORD)
        .await
        .expect("login should succeed")
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

pub async fn requests_to(server: &MockServer, target: &str) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.iter().filter(|r| r.url.path() == target).count())
        .unwrap_or(0)
}
