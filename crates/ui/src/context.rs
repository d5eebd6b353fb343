use std::sync::Arc;

use services::SessionLoopService;

pub trait UiApp: Send + Sync {
    fn session_loop(&self) -> Arc<SessionLoopService>;

    /// Whether `Ctrl+0` may fill in the answers.
    fn reveal_enabled(&self) -> bool {
        true
    }
}

#[derive(Clone)]
pub struct AppContext {
    session_loop: Arc<SessionLoopService>,
    reveal_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_loop: app.session_loop(),
            reveal_enabled: app.reveal_enabled(),
        }
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    #[must_use]
    pub fn reveal_enabled(&self) -> bool {
        self.reveal_enabled
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
