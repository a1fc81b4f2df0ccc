use std::sync::Arc;

use mashwar_cloud::ObjectStore;

use crate::config::ServerConfig;
use crate::sessions::WizardSessions;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Every
/// collaborator is constructed explicitly by the composition root and
/// injected here; there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mashwar_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded images.
    pub store: Arc<dyn ObjectStore>,
    /// In-memory wizard session registry.
    pub sessions: Arc<WizardSessions>,
}
