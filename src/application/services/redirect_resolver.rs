//! Turns a request path segment into a redirect destination.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::application::services::LinkService;
use crate::domain::entities::LinkLookup;
use crate::domain::repositories::LinkRepository;
use crate::error::LinkError;

/// Resolves path segments to destination URLs.
///
/// Names are tried first; the id is a fallback consulted only when no link
/// has that name, so a name that happens to look like another link's id
/// always wins.
pub struct RedirectResolver<R: LinkRepository + ?Sized> {
    links: Arc<LinkService<R>>,
}

impl<R: LinkRepository + ?Sized> RedirectResolver<R> {
    pub fn new(links: Arc<LinkService<R>>) -> Self {
        Self { links }
    }

    /// Returns the destination URL for `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if neither a name nor an id matches.
    /// Returns [`LinkError::StorageUnavailable`] from whichever stage failed;
    /// a storage failure on the name stage does not fall through to the id.
    pub async fn resolve(&self, segment: &str) -> Result<String, LinkError> {
        let by_name = LinkLookup::ByName(segment.to_string());

        match self.links.get_link(&by_name).await {
            Ok(link) => return Ok(link.url),
            Err(LinkError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        // Ids are UUIDs; anything else cannot match the fallback.
        let Ok(id) = Uuid::parse_str(segment) else {
            return Err(LinkError::NotFound(by_name));
        };

        debug!(%id, "Name miss, resolving by id");
        let link = self.links.get_link(&LinkLookup::ById(id)).await?;

        Ok(link.url)
    }
}
