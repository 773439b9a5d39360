//! Storefront product listing.

use axum::{
    Json,
    extract::{Query, State},
};
use elyosr_core::{CATEGORIES, CategoryFilter, Product, filter_products};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Selected category label; missing or the sentinel means all.
    pub category: Option<String>,
    /// Search term matched against product names.
    pub q: Option<String>,
}

/// Filtered listing returned to the storefront.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub category: String,
    pub search: String,
    pub products: Vec<Product>,
    pub total: usize,
}

/// Category labels, "all" sentinel first.
pub async fn categories() -> Json<&'static [&'static str]> {
    Json(CATEGORIES)
}

/// Products passing the category and search filters, in catalog order.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<ProductListing> {
    let category = CategoryFilter::parse(query.category.as_deref().unwrap_or_default());
    let search = query.q.unwrap_or_default();

    let catalog = state.catalog().read().await;
    let products: Vec<Product> = filter_products(catalog.products(), &category, &search)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(shown = products.len(), total = catalog.len(), "listing filtered");

    Json(ProductListing {
        category: category.label().to_owned(),
        search,
        products,
        total: catalog.len(),
    })
}
