//! Earthquake API - a read-only lookup service over a seeded table
//! of historic earthquakes.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, migrations, seed data)
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (response bodies)
//! - **utils**: Utility functions and helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Reset and repopulate the sample data
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Earthquake, EarthquakeResponse};
pub use errors::{AppError, AppResult};
