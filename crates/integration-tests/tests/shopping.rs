//! Storefront browsing, cart and checkout hand-off.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use elyosr_core::{CATEGORIES, OrderInfoError};
use elyosr_integration_tests::TestApp;
use serde_json::json;

fn order(address: &str) -> serde_json::Value {
    json!({
        "name": "أحمد",
        "phone": "01000000000",
        "address": address,
        "notes": "",
    })
}

#[tokio::test]
async fn test_fresh_store_is_seeded() {
    let app = TestApp::new();

    let listing = app.get("/api/products").await.json();
    assert_eq!(listing["total"], 8);
    assert_eq!(listing["products"][0]["id"], "1");

    let categories = app.get("/api/categories").await.json();
    assert_eq!(categories.as_array().unwrap().len(), CATEGORIES.len());
    assert_eq!(categories[0], "الكل");
}

#[tokio::test]
async fn test_category_filter() {
    let app = TestApp::new();

    let listing = app
        .get("/api/products?category=%D8%AA%D8%B3%D8%A7%D9%84%D9%8A")
        .await
        .json();
    let products = listing["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p["category"] == "تسالي"));
}

#[tokio::test]
async fn test_cart_total_over_repeated_adds() {
    let app = TestApp::new();

    // 15 + 15 + 10
    app.add_to_cart("5").await;
    app.add_to_cart("5").await;
    let cart = app.add_to_cart("1").await.json();

    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
    assert_eq!(cart["items"][0]["quantity"], 2);
    assert_eq!(cart["total"], 40);
    assert_eq!(cart["item_count"], 3);
}

#[tokio::test]
async fn test_quantity_never_drops_below_one() {
    let app = TestApp::new();
    app.add_to_cart("2").await;

    let cart = app
        .post_json(
            "/api/cart/update",
            &json!({"product_id": "2", "delta": -100}),
        )
        .await
        .json();
    assert_eq!(cart["items"][0]["quantity"], 1);

    let cart = app
        .post_json("/api/cart/remove", &json!({"product_id": "2"}))
        .await
        .json();
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"], 0);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let app = TestApp::new();
    let response = app.add_to_cart("missing").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_requires_all_fields() {
    let app = TestApp::new();
    app.add_to_cart("1").await;

    let response = app.post_json("/api/checkout", &order("")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), OrderInfoError::ALERT);

    let cart = app.get("/api/cart").await.json();
    assert_eq!(cart["item_count"], 1);
}

#[tokio::test]
async fn test_checkout_hands_off_and_clears_cart() {
    let app = TestApp::new();
    app.add_to_cart("1").await;
    app.add_to_cart("1").await;

    let response = app.post_json("/api/checkout", &order("شارع 9")).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let link = response.location();
    assert!(link.starts_with("https://wa.me/201012345678?text="));
    // "2 × 10 ج.م" with × encoded as UTF-8
    assert!(link.contains("2%20%C3%97%2010"));
    assert!(!link.contains(' '));

    let cart = app.get("/api/cart").await.json();
    assert!(cart["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_keeps_snapshot_after_admin_edit() {
    let app = TestApp::new();
    app.add_to_cart("1").await;
    app.login_admin().await;

    let response = app
        .post_json(
            "/admin/products",
            &json!({
                "id": "1",
                "name": "شيبسي جديد",
                "price": 99,
                "category": "تسالي",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let cart = app.get("/api/cart").await.json();
    assert_eq!(cart["items"][0]["price"], 10);
    assert_eq!(cart["items"][0]["name"], "شيبسي بالجبنة");
}

#[tokio::test]
async fn test_view_toggle() {
    let app = TestApp::new();

    let view = app.get("/api/view").await.json();
    assert_eq!(view["view"], "customer");

    let view = app.post("/api/view/toggle").await.json();
    assert_eq!(view["view"], "admin");
    assert_eq!(view["admin_authenticated"], false);
}
