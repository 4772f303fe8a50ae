//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectResolver};
use crate::domain::repositories::LinkRepository;

/// Services shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_resolver: Arc<RedirectResolver<dyn LinkRepository>>,
}

impl AppState {
    /// Wires the service and the resolver over one repository.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        let link_service = Arc::new(LinkService::new(repository));
        let redirect_resolver = Arc::new(RedirectResolver::new(link_service.clone()));

        Self {
            link_service,
            redirect_resolver,
        }
    }
}
