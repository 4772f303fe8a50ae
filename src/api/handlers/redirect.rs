//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a path segment to its destination URL.
///
/// # Endpoint
///
/// `GET /{segment}`
///
/// # Resolution
///
/// 1. Look the segment up as a link name
/// 2. On a miss, look it up as a link id
/// 3. Respond `301 Moved Permanently` with `Location` set to the URL
///
/// # Errors
///
/// Returns 404 Not Found if neither stage matches.
pub async fn redirect_handler(
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.redirect_resolver.resolve(&segment).await?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        error!(error = %e, %segment, "Stored URL is not a valid Location header");
        AppError::internal("Internal Server Error", json!({}))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
