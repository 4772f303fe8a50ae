//! Handlers for link management endpoints (list, create, update, delete).

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use crate::api::dto::link::{LinkRequest, LinkResponse};
use crate::api::extract::{LinkId, ValidatedJson};
use crate::error::{AppError, LinkError};
use crate::state::AppState;

/// Lists all links.
///
/// # Endpoint
///
/// `GET /links`
///
/// # Response
///
/// `200 OK` with a JSON array, empty when no links exist. No ordering is
/// guaranteed.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "name": "docs", "url": "https://docs.rs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or invalid.
/// Returns 409 Conflict if the name is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state.link_service.create_link(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Replaces name and url of a link.
///
/// # Endpoint
///
/// `PUT /links/{id}`
///
/// Both fields are required and both overwrite the stored values; the id is
/// preserved.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not a UUID or the body is invalid.
/// Returns 404 Not Found if no link has this id.
/// Returns 409 Conflict if another link already uses the new name.
pub async fn update_link_handler(
    State(state): State<AppState>,
    LinkId(id): LinkId,
    ValidatedJson(payload): ValidatedJson<LinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.update_link(id, payload.into()).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// Responds `200 OK` with an empty body.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not a UUID.
/// Returns 404 Not Found if no link has this id.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    LinkId(id): LinkId,
) -> Result<StatusCode, AppError> {
    state
        .link_service
        .delete_link(id)
        .await
        .map_err(|e| match e {
            LinkError::NotFound(_) => AppError::not_found(
                format!("Link with id: \"{}\" is not found", id),
                json!({ "id": id }),
            ),
            other => other.into(),
        })?;

    Ok(StatusCode::OK)
}
