//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// State shared by all requests for the lifetime of the process.
///
/// Cloning is cheap: clones share the same service and code store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
}

impl AppState {
    /// Builds the state around an existing code store.
    pub fn new(link_repository: Arc<MemoryLinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}
