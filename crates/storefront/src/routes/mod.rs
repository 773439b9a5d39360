//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Health check
//!
//! # Storefront
//! GET    /api/categories              - Category list (sentinel first)
//! GET    /api/products?category=&q=   - Filtered product listing
//!
//! # Cart
//! GET    /api/cart                    - Cart contents and total
//! POST   /api/cart/add                - Add one unit of a product
//! POST   /api/cart/update             - Change a line's quantity by a delta
//! POST   /api/cart/remove             - Remove a line
//!
//! # Checkout
//! POST   /api/checkout                - Hand the order off to WhatsApp (303)
//!
//! # Preferences
//! GET    /api/theme                   - Current theme
//! POST   /api/theme/toggle            - Flip and persist theme
//! GET    /api/view                    - Current top-level view
//! POST   /api/view/toggle             - Switch storefront <-> admin
//!
//! # Admin (password gate)
//! POST   /admin/login                 - Enter the admin password
//! GET    /admin/products?q=           - Searchable product listing
//! GET    /admin/stats                 - Product count and average price
//! POST   /admin/products              - Create or update a product
//! DELETE /admin/products/{id}?confirm=true - Delete a product
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod preferences;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the storefront API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(products::categories))
        .route("/products", get(products::index))
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::submit))
        .route("/theme", get(preferences::theme))
        .route("/theme/toggle", post(preferences::toggle_theme))
        .route("/view", get(preferences::view))
        .route("/view/toggle", post(preferences::toggle_view))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/products", get(admin::index).post(admin::save))
        .route("/products/{id}", delete(admin::destroy))
        .route("/stats", get(admin::stats))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
