//! Request extractors that reject bad input with [`AppError`].

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then validated.
///
/// Missing or malformed bodies and failed validation all become
/// `400 validation_error`, so handlers only ever see well-formed input.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                "Invalid request body",
                json!({ "reason": rejection.body_text() }),
            )
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Link id taken from the `{id}` path parameter.
pub struct LinkId(pub Uuid);

impl<S> FromRequestParts<S> for LinkId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(
                    "Invalid path parameter",
                    json!({ "reason": rejection.body_text() }),
                )
            })?;

        let id = Uuid::parse_str(&raw).map_err(|_| {
            AppError::bad_request("id must be a UUID", json!({ "id": raw }))
        })?;

        Ok(Self(id))
    }
}
