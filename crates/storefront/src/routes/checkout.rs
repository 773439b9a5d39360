//! Checkout: order hand-off to `WhatsApp`.
//!
//! The shop keeps no order record. Submitting checkout validates the
//! contact details, formats the cart into a message, clears the cart, and
//! redirects the client to a `wa.me` deep link. Whether the customer
//! actually sends the message is unknown to the shop.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use elyosr_core::OrderInfo;
use elyosr_core::order::order_link;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Submit the order.
///
/// Responds `303 See Other` with the deep link in `Location`. Incomplete
/// contact details are rejected with `400` and leave the cart untouched.
#[instrument(skip(state, info), fields(items = tracing::field::Empty))]
pub async fn submit(
    State(state): State<AppState>,
    Json(info): Json<OrderInfo>,
) -> Result<impl IntoResponse> {
    if let Err(e) = info.validate() {
        tracing::info!(error = %e, "checkout blocked");
        return Err(e.into());
    }

    let link = {
        let mut cart = state.cart().lock().await;
        tracing::Span::current().record("items", cart.len());

        let link = order_link(
            &state.config().whatsapp_phone,
            &info,
            cart.items(),
            cart.total(),
        );
        cart.clear();
        link
    };

    add_breadcrumb("checkout", "Order handed off to WhatsApp", None);
    tracing::info!("order handed off");

    // Hand-off boundary: fire and forget, nothing comes back.
    Ok(Redirect::to(&link))
}
