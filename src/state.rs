//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DashboardService;
use crate::infrastructure::backend::HttpDashBackend;

/// State shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardService<HttpDashBackend>>,
}

impl AppState {
    pub fn new(backend: HttpDashBackend) -> Self {
        Self {
            dashboard: Arc::new(DashboardService::new(Arc::new(backend))),
        }
    }
}
