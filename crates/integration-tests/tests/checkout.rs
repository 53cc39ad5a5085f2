//! Integration tests for the mock checkout flow.

#![allow(clippy::unwrap_used)]

use chrono::DateTime;
use gizmo_shack_core::OrderId;
use gizmo_shack_integration_tests::TestApp;
use serde_json::{Value, json};

async fn checkout(app: &TestApp, body: &Value) -> reqwest::Response {
    app.client
        .post(app.url("/api/checkout"))
        .json(body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_checkout_builds_receipt_from_submitted_snapshot() {
    let app = TestApp::spawn().await;

    // The store holds something entirely different from the snapshot
    app.client
        .post(app.url("/api/cart"))
        .json(&json!({ "productId": 3, "quantity": 5 }))
        .send()
        .await
        .unwrap();

    // Binary-exact prices keep the float comparison exact
    let body = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "cartItems": [
            { "price": 10.25, "quantity": 2, "name": "Gadget" },
            { "price": 0.5, "quantity": 1 },
        ],
    });

    let resp = checkout(&app, &body).await;
    assert_eq!(resp.status(), 200);
    let receipt: Value = resp.json().await.unwrap();

    assert_eq!(receipt["total"].as_f64().unwrap(), 21.0);
    assert_eq!(receipt["customer"], json!({ "name": "Ada Lovelace", "email": "ada@example.com" }));
    assert_eq!(
        receipt["message"],
        "Thank you for your purchase! This is a mock transaction."
    );

    // Submitted items come back verbatim, extra fields included
    let items = receipt["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Gadget");
    assert_eq!(items[0]["quantity"].as_i64().unwrap(), 2);
}

#[tokio::test]
async fn test_order_id_format_and_uniqueness() {
    let app = TestApp::spawn().await;
    let body = json!({ "name": "A", "email": "a@b.c", "cartItems": [] });

    let first: Value = checkout(&app, &body).await.json().await.unwrap();
    let second: Value = checkout(&app, &body).await.json().await.unwrap();

    let first_id = first["orderId"].as_str().unwrap();
    let second_id = second["orderId"].as_str().unwrap();

    // ORD followed by exactly 9 uppercase base-36 characters
    assert!(OrderId::parse(first_id).is_ok(), "bad order id: {first_id}");
    assert!(OrderId::parse(second_id).is_ok(), "bad order id: {second_id}");
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_timestamp_is_iso8601() {
    let app = TestApp::spawn().await;
    let body = json!({ "name": "A", "email": "a@b.c", "cartItems": [] });

    let receipt: Value = checkout(&app, &body).await.json().await.unwrap();
    let timestamp = receipt["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok(), "bad timestamp: {timestamp}");
}

#[tokio::test]
async fn test_checkout_clears_cart_regardless_of_snapshot() {
    let app = TestApp::spawn().await;

    for product_id in [1, 2, 6] {
        app.client
            .post(app.url("/api/cart"))
            .json(&json!({ "productId": product_id, "quantity": 2 }))
            .send()
            .await
            .unwrap();
    }

    // Snapshot deliberately omits everything the store holds
    let body = json!({ "name": "A", "email": "a@b.c", "cartItems": [] });
    let resp = checkout(&app, &body).await;
    assert_eq!(resp.status(), 200);

    let cart: Value = app
        .client
        .get(app.url("/api/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn test_empty_snapshot_totals_zero() {
    let app = TestApp::spawn().await;
    let body = json!({ "name": "A", "email": "a@b.c", "cartItems": [] });

    let receipt: Value = checkout(&app, &body).await.json().await.unwrap();
    assert_eq!(receipt["total"].as_f64().unwrap(), 0.0);
    assert!(receipt["items"].as_array().unwrap().is_empty());
}
