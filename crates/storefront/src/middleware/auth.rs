//! Admin gate extractor.
//!
//! The gate only checks that the admin password was entered once during
//! this process's session. It is a convenience barrier for a single-user
//! tool, not access control.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires the admin password to have been entered.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_admin: RequireAdmin) -> impl IntoResponse {
///     "catalog editor"
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.is_admin_authenticated() {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized(
                "admin password required".to_string(),
            ))
        }
    }
}
