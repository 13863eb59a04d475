use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::error::CatalogError;
use crate::sessions::SessionLoopService;

/// Assembles app-facing services around one shared catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    session_loop: Arc<SessionLoopService>,
}

impl AppServices {
    /// Build services backed by the question bank compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded data fails to load.
    pub fn embedded() -> Result<Self, CatalogError> {
        Ok(Self::from_catalog(CatalogService::embedded()?))
    }

    #[must_use]
    pub fn from_catalog(catalog: CatalogService) -> Self {
        let catalog = Arc::new(catalog);
        let session_loop = Arc::new(SessionLoopService::new(Arc::clone(&catalog)));
        Self {
            catalog,
            session_loop,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }
}
