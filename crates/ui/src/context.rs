use std::sync::Arc;

use services::{
    AuthService, BadgeService, CatalogService, ConfirmService, ProgressService, ToastService,
};

/// Services the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn toasts(&self) -> Arc<ToastService>;
    fn confirms(&self) -> Arc<ConfirmService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn badges(&self) -> Arc<BadgeService>;
}

/// Cheap-to-clone bundle of the shared services, provided via Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    toasts: Arc<ToastService>,
    confirms: Arc<ConfirmService>,
    progress: Arc<ProgressService>,
    catalog: Arc<CatalogService>,
    badges: Arc<BadgeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            toasts: app.toasts(),
            confirms: app.confirms(),
            progress: app.progress(),
            catalog: app.catalog(),
            badges: app.badges(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn toasts(&self) -> Arc<ToastService> {
        Arc::clone(&self.toasts)
    }

    #[must_use]
    pub fn confirms(&self) -> Arc<ConfirmService> {
        Arc::clone(&self.confirms)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn badges(&self) -> Arc<BadgeService> {
        Arc::clone(&self.badges)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
