//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories and SeaORM entities
//! - Seed data

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{EarthquakeRepository, EarthquakeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEarthquakeRepository;
