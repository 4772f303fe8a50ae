//! Repository trait for link storage.

use crate::domain::entities::{Link, LinkInput};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Boxed cause of a storage failure.
pub type StorageCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of a store operation that did not succeed.
///
/// `Conflict` and `NotFound` are distinguishable signals the service relies on;
/// everything else collapses into `Rejected` or `Unavailable`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The write would give a second link the same name.
    #[error("link name `{0}` is already taken")]
    Conflict(String),

    /// No link exists with this id.
    #[error("link {0} does not exist")]
    NotFound(Uuid),

    /// The store refused the record itself (e.g. a check constraint).
    #[error("link rejected by storage: {0}")]
    Rejected(String),

    /// The store could not be reached or failed internally.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] StorageCause),
}

impl RepositoryError {
    pub fn unavailable(cause: impl Into<StorageCause>) -> Self {
        Self::Unavailable(cause.into())
    }
}

/// Durable storage for [`Link`] records.
///
/// The store owns the name-uniqueness guarantee: `insert` and `update` must
/// check and write atomically, so concurrent writers racing on one name see
/// exactly one success and [`RepositoryError::Conflict`] for the rest.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns every link, in whatever order the store yields them.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn find_all(&self) -> Result<Vec<Link>, RepositoryError>;

    /// Finds the link with exactly this name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, RepositoryError>;

    /// Finds the link with this id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, RepositoryError>;

    /// Assigns an id and persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the name is already taken.
    /// Returns [`RepositoryError::Rejected`] if a field is empty.
    async fn insert(&self, input: LinkInput) -> Result<Link, RepositoryError>;

    /// Replaces name and url of an existing link. The id is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no link has this id.
    /// Returns [`RepositoryError::Conflict`] if another link already uses the name.
    async fn update(&self, id: Uuid, input: LinkInput) -> Result<Link, RepositoryError>;

    /// Removes the link with this id and returns the number of removed records.
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
