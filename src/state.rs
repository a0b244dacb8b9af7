//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::MappingRepository;

/// Link service running against whichever storage backend was configured.
pub type DynLinkService = LinkService<dyn MappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<DynLinkService>) -> Self {
        Self { link_service }
    }

    /// Builds state around a repository, base URL and code length.
    pub fn from_repository(
        repository: Arc<dyn MappingRepository>,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        let link_service = LinkService::new(repository, base_url).with_code_length(code_length);
        Self::new(Arc::new(link_service))
    }
}
