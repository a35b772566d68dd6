use super::security_config::SecurityConfig;
use crate::guard::RouteTable;

/// Immutable per-process state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Secret and algorithm used to verify session tokens
    pub security: SecurityConfig,
    /// Static auth/protected/excluded route classification
    pub routes: RouteTable,
}

impl AppState {
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            routes: RouteTable::default(),
        }
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }
}
