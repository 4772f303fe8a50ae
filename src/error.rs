//! Service error taxonomy and its HTTP representation.
//!
//! [`LinkError`] is what the application layer returns; it never carries
//! storage details. [`AppError`] is the transport-level error rendered as a
//! JSON envelope:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "url short name already exists", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::entities::LinkLookup;

/// Message returned for name conflicts on create and update.
pub const DUPLICATE_NAME_MESSAGE: &str = "url short name already exists";

/// Failure kinds of [`crate::application::services::LinkService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Another link already uses this name.
    #[error("link name `{name}` already exists")]
    DuplicateName { name: String },

    /// No link matches the lookup.
    #[error("no link with {0}")]
    NotFound(LinkLookup),

    /// The store failed. The cause is logged, not carried.
    #[error("link storage is unavailable")]
    StorageUnavailable,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload inside the response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing error.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable payload.
    pub fn into_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => write!(f, "{}", message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::DuplicateName { name } => {
                AppError::conflict(DUPLICATE_NAME_MESSAGE, json!({ "name": name }))
            }
            LinkError::NotFound(_) => AppError::not_found("Not Found", json!({})),
            LinkError::StorageUnavailable => {
                AppError::internal("Internal Server Error", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<Value> = errs
                    .iter()
                    .map(|e| {
                        let text = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        Value::String(text)
                    })
                    .collect();
                (field.to_string(), Value::Array(messages))
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_duplicate_name_maps_to_conflict() {
        let err: AppError = LinkError::DuplicateName {
            name: "docs".to_string(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::CONFLICT);
        let info = err.into_error_info();
        assert_eq!(info.code, "conflict");
        assert_eq!(info.message, DUPLICATE_NAME_MESSAGE);
        assert_eq!(info.details["name"], "docs");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = LinkError::NotFound(LinkLookup::ById(Uuid::new_v4())).into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.into_error_info().message, "Not Found");
    }

    #[test]
    fn test_storage_unavailable_hides_details() {
        let err: AppError = LinkError::StorageUnavailable.into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let info = err.into_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.message, "Internal Server Error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("bad", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
