//! Admin password gate and catalog editing.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use elyosr_core::DEFAULT_PRODUCT_IMAGE;
use elyosr_integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_admin_routes_locked_until_login() {
    let app = TestApp::new();

    assert_eq!(app.get("/admin/products").await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.get("/admin/stats").await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.delete("/admin/products/1?confirm=true").await.status,
        StatusCode::UNAUTHORIZED
    );

    app.login_admin().await;
    assert_eq!(app.get("/admin/products").await.status, StatusCode::OK);

    let view = app.get("/api/view").await.json();
    assert_eq!(view["admin_authenticated"], true);
}

#[tokio::test]
async fn test_wrong_password() {
    let app = TestApp::new();

    let response = app
        .post_json("/admin/login", &json!({"password": "ADMIN"}))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "عذراً، كلمة المرور غير صحيحة");
    assert_eq!(app.get("/admin/stats").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_appends_exactly_one_product() {
    let app = TestApp::new();
    app.login_admin().await;

    let response = app
        .post_json(
            "/admin/products",
            &json!({"name": "مياه معدنية", "price": 7, "category": "أخرى"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let saved = response.json();
    assert_eq!(saved["action"], "created");
    assert_eq!(saved["persisted"], true);
    let id = saved["id"].as_str().unwrap().to_owned();
    assert_eq!(id.len(), 9);

    let listing = app.get("/admin/products").await.json();
    assert_eq!(listing["total"], 9);
    let products = listing["products"].as_array().unwrap();
    let created = products.last().unwrap();
    assert_eq!(created["id"], id.as_str());
    assert_eq!(created["image"], DEFAULT_PRODUCT_IMAGE);
    assert_eq!(products.iter().filter(|p| p["id"] == id.as_str()).count(), 1);
}

#[tokio::test]
async fn test_update_unknown_id_changes_nothing() {
    let app = TestApp::new();
    app.login_admin().await;

    let response = app
        .post_json(
            "/admin/products",
            &json!({"id": "nope", "name": "x", "price": 1, "category": "أخرى"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let listing = app.get("/admin/products").await.json();
    assert_eq!(listing["total"], 8);
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let app = TestApp::new();
    app.login_admin().await;

    let response = app.delete("/admin/products/4").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/admin/products").await.json()["total"], 8);

    let response = app.delete("/admin/products/4?confirm=true").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["id"], "4");

    let listing = app.get("/admin/products").await.json();
    assert_eq!(listing["total"], 7);

    let response = app.delete("/admin/products/4?confirm=true").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_and_stats() {
    let app = TestApp::new();
    app.login_admin().await;

    let listing = app
        .get("/admin/products?q=%D8%AC%D8%A8%D9%86%D8%A9")
        .await
        .json();
    // "جبنة" appears in two seeded names
    assert_eq!(listing["shown"], 2);
    assert_eq!(listing["total"], 8);

    // (10 + 38 + 75 + 210 + 15 + 120 + 85 + 12) / 8 = 70.625
    let stats = app.get("/admin/stats").await.json();
    assert_eq!(stats["product_count"], 8);
    assert_eq!(stats["average_price"], "70.6");
}
