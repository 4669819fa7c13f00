//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file-backed SQLite for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://earthquakes.db?mode=rwc";
