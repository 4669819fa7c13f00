//! Application state - Dependency injection container.
//!
//! Provides centralized access to the service layer and infrastructure.

use std::sync::Arc;

use crate::infra::repositories::EarthquakeStore;
use crate::infra::Database;
use crate::services::{EarthquakeManager, EarthquakeService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Earthquake lookup service
    pub earthquake_service: Arc<dyn EarthquakeService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database, wiring the
    /// repository into the service.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(EarthquakeStore::new(database.get_connection()));
        let earthquake_service = Arc::new(EarthquakeManager::new(repo));

        Self {
            earthquake_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(earthquake_service: Arc<dyn EarthquakeService>, database: Arc<Database>) -> Self {
        Self {
            earthquake_service,
            database,
        }
    }
}
