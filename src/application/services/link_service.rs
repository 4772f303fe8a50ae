//! Link management service.

use std::sync::Arc;

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::domain::entities::{Link, LinkInput, LinkLookup};
use crate::domain::repositories::{LinkRepository, RepositoryError};
use crate::error::LinkError;

/// Owns the business rules around links and is the only caller of the store.
///
/// Inputs are assumed to be validated by the transport layer. Uniqueness is
/// left entirely to the store's atomic write path; the service never does a
/// read-then-write name check.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all links in store order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::StorageUnavailable`] if the store fails.
    pub async fn list_links(&self) -> Result<Vec<Link>, LinkError> {
        self.repository
            .find_all()
            .await
            .map_err(|e| storage_failure("list", e))
    }

    /// Creates a link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DuplicateName`] if the name is taken.
    /// Returns [`LinkError::StorageUnavailable`] on any other store failure.
    pub async fn create_link(&self, input: LinkInput) -> Result<Link, LinkError> {
        match self.repository.insert(input).await {
            Ok(link) => {
                info!(id = %link.id, name = %link.name, "Link created");
                Ok(link)
            }
            Err(e) => Err(write_failure("create", e)),
        }
    }

    /// Finds a single link by name or by id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if nothing matches.
    /// Returns [`LinkError::StorageUnavailable`] if the store fails.
    pub async fn get_link(&self, lookup: &LinkLookup) -> Result<Link, LinkError> {
        let found = match lookup {
            LinkLookup::ByName(name) => self.repository.find_by_name(name).await,
            LinkLookup::ById(id) => self.repository.find_by_id(*id).await,
        }
        .map_err(|e| storage_failure("get", e))?;

        found.ok_or_else(|| {
            debug!(%lookup, "Link not found");
            LinkError::NotFound(lookup.clone())
        })
    }

    /// Replaces name and url of an existing link, keeping its id.
    ///
    /// Renames go through the same uniqueness constraint as creation.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if no link has this id.
    /// Returns [`LinkError::DuplicateName`] if another link uses the new name.
    /// Returns [`LinkError::StorageUnavailable`] on any other store failure.
    pub async fn update_link(&self, id: Uuid, input: LinkInput) -> Result<Link, LinkError> {
        let current = self.get_link(&LinkLookup::ById(id)).await?;
        if current.matches(&input) {
            debug!(%id, "Update changes nothing");
            return Ok(current);
        }

        match self.repository.update(id, input).await {
            Ok(link) => {
                info!(id = %link.id, name = %link.name, "Link updated");
                Ok(link)
            }
            Err(e) => Err(write_failure("update", e)),
        }
    }

    /// Deletes a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if nothing was removed.
    /// Returns [`LinkError::StorageUnavailable`] if the store fails.
    pub async fn delete_link(&self, id: Uuid) -> Result<(), LinkError> {
        let affected = self
            .repository
            .delete(id)
            .await
            .map_err(|e| storage_failure("delete", e))?;

        if affected == 0 {
            debug!(%id, "Nothing to delete");
            return Err(LinkError::NotFound(LinkLookup::ById(id)));
        }

        info!(%id, "Link deleted");
        Ok(())
    }

    /// Returns true if the store answers a ping.
    pub async fn storage_healthy(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Storage health check failed");
                false
            }
        }
    }
}

/// Maps failures of `insert`/`update`, where conflicts and misses are expected.
fn write_failure(operation: &'static str, err: RepositoryError) -> LinkError {
    match err {
        RepositoryError::Conflict(name) => {
            debug!(operation, %name, "Link name already taken");
            LinkError::DuplicateName { name }
        }
        RepositoryError::NotFound(id) => LinkError::NotFound(LinkLookup::ById(id)),
        other => storage_failure(operation, other),
    }
}

/// Logs the store's cause and collapses it into [`LinkError::StorageUnavailable`].
fn storage_failure(operation: &'static str, err: RepositoryError) -> LinkError {
    error!(operation, error = %err, "Link storage failure");
    LinkError::StorageUnavailable
}
