//! Theme and view preferences.

use axum::{Json, extract::State};
use elyosr_core::{AppView, Theme};
use serde::Serialize;
use tracing::instrument;

use crate::services::theme::toggle_theme as persist_toggle;
use crate::state::AppState;

/// Current theme.
#[derive(Debug, Serialize)]
pub struct CurrentTheme {
    pub theme: Theme,
}

/// Theme after a toggle.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    /// False if the new theme could not be saved; it still applies to this session.
    pub persisted: bool,
}

/// Current top-level view.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: AppView,
    pub admin_authenticated: bool,
}

/// Get the current theme.
pub async fn theme(State(state): State<AppState>) -> Json<CurrentTheme> {
    let theme = *state.theme().lock().await;
    Json(CurrentTheme { theme })
}

/// Flip the theme and persist it.
#[instrument(skip(state))]
pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mut theme = state.theme().lock().await;
    let (next, persisted) = match persist_toggle(state.storage(), *theme) {
        Ok(next) => (next, true),
        Err(e) => {
            tracing::warn!(error = %e, "theme changed for this session only");
            (theme.toggled(), false)
        }
    };
    *theme = next;

    Json(ThemeResponse {
        theme: next,
        persisted,
    })
}

/// Get the active view.
pub async fn view(State(state): State<AppState>) -> Json<ViewResponse> {
    let view = *state.view().lock().await;
    Json(ViewResponse {
        view,
        admin_authenticated: state.is_admin_authenticated(),
    })
}

/// Switch between the storefront and the admin view.
///
/// Switching views never changes the admin gate; the admin view still asks
/// for the password until it has been entered once.
#[instrument(skip(state))]
pub async fn toggle_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let mut view = state.view().lock().await;
    *view = view.toggled();
    tracing::debug!(view = ?*view, "view toggled");

    Json(ViewResponse {
        view: *view,
        admin_authenticated: state.is_admin_authenticated(),
    })
}
