//! Integration tests for Smartshop.
//!
//! The tests in `tests/` drive a running API server over HTTP, which in turn
//! needs a reachable MongoDB. They are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB, then the server
//! cargo run -p smartshop-api
//!
//! # Run integration tests against it
//! cargo test -p smartshop-integration-tests -- --ignored
//! ```
//!
//! Set `SMARTSHOP_BASE_URL` to point the tests at a non-default address.

use reqwest::Client;
use serde_json::{Value, json};

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("SMARTSHOP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client for test requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique email per test run, so tests never collide on the cart and user
/// collections' email keys.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4().simple())
}

/// Test helper: create a product via the API and return its JSON body.
///
/// # Panics
///
/// Panics if the request fails or the response is not a product with an id.
pub async fn create_product(client: &Client, name: &str, owner: Option<&str>) -> Value {
    let base_url = api_base_url();
    let mut body = json!({
        "name": name,
        "price": "12.99",
        "image": "https://img.example.com/test.png",
    });
    if let Some(owner) = owner {
        body["email"] = json!(owner);
    }

    let resp = client
        .post(format!("{base_url}/products"))
        .json(&body)
        .send()
        .await
        .expect("Failed to create test product");
    assert!(resp.status().is_success());

    let product: Value = resp.json().await.expect("Failed to read product body");
    assert!(product["id"].is_string(), "product response must carry an id");
    product
}
