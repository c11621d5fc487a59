//! Integration tests for the product endpoints.
//!
//! These tests require a running API server and a reachable MongoDB.
//!
//! Run with: cargo test -p smartshop-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use smartshop_integration_tests::{api_base_url, client, create_product, unique_email};

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_create_and_get_product() {
    let client = client();
    let base_url = api_base_url();

    let created = create_product(&client, "Integration Mug", None).await;
    let id = created["id"].as_str().expect("id");
    assert_eq!(created["price"], "12.99");
    assert!(created["createdAt"].is_string());

    let resp = client
        .get(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = resp.json().await.expect("Failed to read product");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Integration Mug");
}

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_get_product_not_found() {
    let client = client();
    let base_url = api_base_url();

    // Valid id format, vanishingly unlikely to exist
    let resp = client
        .get(format!("{base_url}/products/ffffffffffffffffffffffff"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_get_product_malformed_id() {
    let client = client();
    let base_url = api_base_url();

    let resp = client
        .get(format!("{base_url}/products/not-a-valid-id"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_latest_products_newest_first() {
    let client = client();
    let base_url = api_base_url();

    create_product(&client, "Latest Check A", None).await;
    let newest = create_product(&client, "Latest Check B", None).await;

    let resp = client
        .get(format!("{base_url}/latest-products"))
        .send()
        .await
        .expect("Failed to get latest products");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Value> = resp.json().await.expect("Failed to read products");
    assert!(products.len() <= 8);
    assert_eq!(products.first().map(|p| p["id"].clone()), Some(newest["id"].clone()));
}

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_list_products_filtered_by_owner() {
    let client = client();
    let base_url = api_base_url();
    let owner = unique_email("seller");

    create_product(&client, "Owned Product", Some(&owner)).await;
    create_product(&client, "Unowned Product", None).await;

    for path in ["products", "myProducts"] {
        let resp = client
            .get(format!("{base_url}/{path}?email={owner}"))
            .send()
            .await
            .expect("Failed to list products");
        assert_eq!(resp.status(), StatusCode::OK);

        let products: Vec<Value> = resp.json().await.expect("Failed to read products");
        assert_eq!(products.len(), 1, "exactly the owned product via /{path}");
        assert_eq!(products[0]["email"], owner.as_str());
    }
}

#[tokio::test]
#[ignore = "Requires a running API server and MongoDB"]
async fn test_delete_product() {
    let client = client();
    let base_url = api_base_url();

    let created = create_product(&client, "Doomed Product", None).await;
    let id = created["id"].as_str().expect("id");

    let resp = client
        .delete(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read delete body");
    assert_eq!(body["deletedCount"], 1);

    // Gone now; a second delete is benign
    let resp = client
        .get(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .delete(format!("{base_url}/products/{id}"))
        .send()
        .await
        .expect("Failed to delete product twice");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to read delete body");
    assert_eq!(body["deletedCount"], 0);
}
