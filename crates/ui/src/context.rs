use std::sync::{Arc, Mutex};

use practice_core::model::SetId;
use services::{CatalogService, SessionLoopService};

pub trait UiApp: Send + Sync {
    /// Practice set to open on launch, if one was requested.
    fn initial_set(&self) -> Option<SetId>;

    fn catalog(&self) -> Arc<CatalogService>;
    fn session_loop(&self) -> Arc<SessionLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_set_configured: Option<SetId>,
    initial_set_once: Arc<Mutex<Option<SetId>>>,

    catalog: Arc<CatalogService>,
    session_loop: Arc<SessionLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_set_configured = app.initial_set();

        Self {
            initial_set_configured,
            initial_set_once: Arc::new(Mutex::new(initial_set_configured)),
            catalog: app.catalog(),
            session_loop: app.session_loop(),
        }
    }

    /// The launch set, handed out once so later visits to the picker stay on it.
    #[must_use]
    pub fn take_initial_set(&self) -> Option<SetId> {
        self.initial_set_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }

    /// The configured value (not the one-shot value).
    #[must_use]
    pub fn initial_set_configured(&self) -> Option<SetId> {
        self.initial_set_configured
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
