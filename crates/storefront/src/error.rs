//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use elyosr_core::OrderInfoError;
use thiserror::Error;

use crate::services::EditorError;
use crate::services::editor::WRONG_PASSWORD_ALERT;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout details are incomplete.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderInfoError),

    /// Admin edit was rejected.
    #[error("Edit rejected: {0}")]
    Editor(#[from] EditorError),

    /// Wrong admin password.
    #[error("Wrong admin password")]
    WrongPassword,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Admin view requested before entering the password.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Storage(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidOrder(_) | Self::Editor(_) => StatusCode::BAD_REQUEST,
            Self::WrongPassword | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Customer-facing alerts are shown verbatim; internals stay hidden
        let message = match &self {
            Self::Storage(_) => "Internal server error".to_string(),
            Self::InvalidOrder(_) => OrderInfoError::ALERT.to_string(),
            Self::WrongPassword => WRONG_PASSWORD_ALERT.to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product", Some(&[("product_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
