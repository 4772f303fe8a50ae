//! In-memory link repository.
//!
//! Keeps everything in RAM with no persistence. Useful for tests and local
//! runs without PostgreSQL (`STORAGE_BACKEND=memory`).

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::entities::{Link, LinkInput};
use crate::domain::repositories::{LinkRepository, RepositoryError};

#[derive(Debug, Default)]
struct State {
    links: HashMap<Uuid, Link>,
    names: HashMap<String, Uuid>,
    /// Ids of deleted links, never handed out again.
    ///
    /// Grows by one entry per delete and is never pruned, which bounds the
    /// store to test and local use.
    retired: HashSet<Uuid>,
}

impl State {
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.links.contains_key(&id) && !self.retired.contains(&id) {
                return id;
            }
        }
    }
}

/// Link repository backed by process memory.
///
/// Every write takes the single write lock, so the name check and the
/// mutation are atomic with respect to other writers.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    state: RwLock<State>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mirrors the non-empty check constraints of the `links` table.
fn reject_empty(input: &LinkInput) -> Result<(), RepositoryError> {
    if input.has_empty_field() {
        return Err(RepositoryError::Rejected("name and url must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    #[instrument(level = "trace", skip(self))]
    async fn find_all(&self) -> Result<Vec<Link>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.links.values().cloned().collect())
    }

    #[instrument(level = "trace", skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .names
            .get(name)
            .and_then(|id| state.links.get(id))
            .cloned())
    }

    #[instrument(level = "trace", skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.links.get(&id).cloned())
    }

    #[instrument(level = "trace", skip(self))]
    async fn insert(&self, input: LinkInput) -> Result<Link, RepositoryError> {
        reject_empty(&input)?;

        let mut state = self.state.write().await;
        if state.names.contains_key(&input.name) {
            return Err(RepositoryError::Conflict(input.name));
        }

        let link = Link::new(state.fresh_id(), input.name, input.url);
        state.names.insert(link.name.clone(), link.id);
        state.links.insert(link.id, link.clone());

        Ok(link)
    }

    #[instrument(level = "trace", skip(self))]
    async fn update(&self, id: Uuid, input: LinkInput) -> Result<Link, RepositoryError> {
        reject_empty(&input)?;

        let mut state = self.state.write().await;
        let Some(current_name) = state.links.get(&id).map(|link| link.name.clone()) else {
            return Err(RepositoryError::NotFound(id));
        };

        if let Some(owner) = state.names.get(&input.name)
            && *owner != id
        {
            return Err(RepositoryError::Conflict(input.name));
        }

        state.names.remove(&current_name);
        state.names.insert(input.name.clone(), id);

        let link = Link::new(id, input.name, input.url);
        state.links.insert(id, link.clone());

        Ok(link)
    }

    #[instrument(level = "trace", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let mut state = self.state.write().await;
        let Some(link) = state.links.remove(&id) else {
            return Ok(0);
        };

        state.names.remove(&link.name);
        state.retired.insert(id);

        Ok(1)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
