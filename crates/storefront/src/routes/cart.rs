//! Cart route handlers.
//!
//! Every mutation responds with the full cart so the client can re-render
//! the drawer and the header badge from one payload.

use axum::{Json, extract::State};
use elyosr_core::{Cart, CartItem, Price, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: Price,
    /// Sum of quantities (header badge).
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub product_id: ProductId,
    pub delta: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Display the cart.
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let cart = state.cart().lock().await;
    Json(CartView::from(&*cart))
}

/// Add one unit of a catalog product.
///
/// The product is copied out of the catalog, so later admin edits do not
/// change what is already in the cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .read()
        .await
        .get(&request.product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let mut cart = state.cart().lock().await;
    cart.add(&product);
    tracing::info!(product_id = %product.id, item_count = cart.item_count(), "added to cart");

    Ok(Json(CartView::from(&*cart)))
}

/// Change a line's quantity by `delta`, never below 1.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartView> {
    let mut cart = state.cart().lock().await;
    cart.update_quantity(&request.product_id, request.delta);
    Json(CartView::from(&*cart))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    let mut cart = state.cart().lock().await;
    cart.remove(&request.product_id);
    Json(CartView::from(&*cart))
}
