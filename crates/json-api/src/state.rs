//! State

use std::sync::Arc;

use cartoffer_app::context::AppContext;

/// Shared request state: the offer and cart services backed by one offer store.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    /// Wrap the services for injection into the router.
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
