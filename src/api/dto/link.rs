//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, LinkInput};

/// Request body for `POST /links` and `PUT /links/{id}`.
///
/// Both fields are required; an update replaces both.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    /// Short name used as the redirect path segment.
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: String,

    /// Absolute destination URL.
    #[validate(
        length(min = 1, message = "url should not be empty"),
        custom(function = "validate_destination")
    )]
    pub url: String,
}

impl From<LinkRequest> for LinkInput {
    fn from(request: LinkRequest) -> Self {
        LinkInput::new(request.name, request.url)
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            name: link.name,
            url: link.url,
        }
    }
}

/// Accepts absolute URLs that carry a host (`https://example.com/path`).
fn validate_destination(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url).map_err(|_| invalid_url())?;

    if !parsed.has_host() {
        return Err(invalid_url());
    }

    Ok(())
}

fn invalid_url() -> ValidationError {
    ValidationError::new("url").with_message("url must be a URL address".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, url: &str) -> LinkRequest {
        LinkRequest {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("docs", "https://docs.rs").validate().is_ok());
        assert!(request("x", "http://localhost:8080/a?b=c").validate().is_ok());
    }

    #[test]
    fn test_empty_name() {
        let errors = request("", "https://docs.rs").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["", "not-a-url", "docs.rs", "mailto:someone@example.com"] {
            let errors = request("docs", url).validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("url"),
                "expected {url:?} to be rejected"
            );
        }
    }
}
