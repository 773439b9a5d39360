//! Admin catalog editor routes.
//!
//! Every route except `login` requires [`RequireAdmin`]. The password check
//! is a cosmetic gate for a single-user tool; see `services::editor`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use elyosr_core::{Product, ProductDraft, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireAdmin;
use crate::services::editor::{self, CatalogStats, EditOutcome};
use crate::state::AppState;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Admin search query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AdminSearchQuery {
    pub q: Option<String>,
}

/// Delete confirmation query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// Admin product listing.
#[derive(Debug, Serialize)]
pub struct AdminListing {
    pub products: Vec<Product>,
    pub shown: usize,
    pub total: usize,
}

/// Result of a save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub outcome: EditOutcome,
    pub persisted: bool,
}

/// Result of a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: ProductId,
    pub persisted: bool,
}

/// Enter the admin password.
///
/// Once accepted, the admin view stays unlocked for the rest of the
/// process's session; there is no logout.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<StatusCode> {
    if !editor::authenticate(&request.password, &state.config().admin_password) {
        tracing::warn!("admin login rejected");
        return Err(AppError::WrongPassword);
    }

    state.mark_admin_authenticated();
    add_breadcrumb("admin", "Admin view unlocked", None);
    tracing::info!("admin view unlocked");
    Ok(StatusCode::NO_CONTENT)
}

/// Products matching the admin search, with shown/total counts.
#[instrument(skip(state, _admin))]
pub async fn index(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<AdminSearchQuery>,
) -> Json<AdminListing> {
    let term = query.q.unwrap_or_default();
    let catalog = state.catalog().read().await;
    let products: Vec<Product> = editor::search(catalog.products(), &term)
        .into_iter()
        .cloned()
        .collect();

    Json(AdminListing {
        shown: products.len(),
        total: catalog.len(),
        products,
    })
}

/// Product count and average price.
pub async fn stats(_admin: RequireAdmin, State(state): State<AppState>) -> Json<CatalogStats> {
    let catalog = state.catalog().read().await;
    Json(editor::stats(catalog.products()))
}

/// Create a product (no id) or replace an existing one (with id).
#[instrument(skip(state, _admin, draft))]
pub async fn save(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let applied = {
        let mut catalog = state.catalog().write().await;
        editor::create_or_update(&mut catalog, draft)?
    };

    let persisted = applied.persisted();
    let status = match &applied.outcome {
        EditOutcome::Created(_) => StatusCode::CREATED,
        EditOutcome::Updated(_) => StatusCode::OK,
        EditOutcome::Unknown(id) => return Err(AppError::NotFound(format!("product {id}"))),
    };

    Ok((
        status,
        Json(SaveResponse {
            outcome: applied.outcome,
            persisted,
        }),
    ))
}

/// Delete a product. Requires `?confirm=true`.
#[instrument(skip(state, _admin))]
pub async fn destroy(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>> {
    let applied = {
        let mut catalog = state.catalog().write().await;
        editor::delete(&mut catalog, &id, query.confirm)?
    };

    if !applied.outcome {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    Ok(Json(DeleteResponse {
        persisted: applied.persisted(),
        id,
    }))
}
