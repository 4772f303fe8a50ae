//! Top-level router.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check
//! - `/links`, `/links/{id}` - Link management
//! - `GET  /{segment}`   - Redirect by name, falling back to id
//!
//! Static routes take precedence over the `/{segment}` capture, so links
//! named `links` or `health` are reachable only by id.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and tracing.
///
/// Trailing-slash normalization is applied by the server around this router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .route("/{segment}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
