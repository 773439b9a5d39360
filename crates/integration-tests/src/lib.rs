//! Integration tests for El Yosr.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elyosr-integration-tests
//! ```
//!
//! Every test drives the full storefront router in-process against a
//! file-backed store in a fresh temporary directory. Restarting a
//! [`TestApp`] rebuilds the router over the same directory, which is how
//! persistence across sessions is exercised.
//!
//! # Test Categories
//!
//! - `shopping` - Catalog browsing, cart and checkout hand-off
//! - `admin_catalog` - Password gate and catalog editing
//! - `persistence` - Catalog and theme surviving a restart

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use elyosr_storefront::build_app;
use elyosr_storefront::config::StorefrontConfig;
use elyosr_storefront::state::AppState;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// A storefront session backed by a temporary data directory.
pub struct TestApp {
    dir: TempDir,
    router: Router,
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Parse the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The body as UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is not UTF-8")
    }

    /// The `Location` header.
    #[must_use]
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("response has no Location header")
    }
}

impl TestApp {
    /// Start a session over an empty data directory.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let router = Self::router_for(&dir);
        Self { dir, router }
    }

    /// End this session and start a new one over the same data directory.
    ///
    /// Cart, view and admin unlock are per session and start fresh; the
    /// catalog and theme are read back from storage.
    #[must_use]
    pub fn restart(self) -> Self {
        let router = Self::router_for(&self.dir);
        Self {
            dir: self.dir,
            router,
        }
    }

    fn router_for(dir: &TempDir) -> Router {
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        build_app(AppState::open(config).expect("Failed to open data dir"))
    }

    /// Send a request through the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("valid request"),
        )
        .await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    /// Unlock the admin view with the default password.
    pub async fn login_admin(&self) {
        let response = self
            .post_json("/admin/login", &serde_json::json!({"password": "admin"}))
            .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    /// Add one unit of `product_id` to the cart.
    pub async fn add_to_cart(&self, product_id: &str) -> TestResponse {
        self.post_json(
            "/api/cart/add",
            &serde_json::json!({"product_id": product_id}),
        )
        .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
