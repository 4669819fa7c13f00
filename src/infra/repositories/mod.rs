//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod earthquake_repository;
pub(crate) mod entities;

pub use earthquake_repository::{EarthquakeRepository, EarthquakeStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use earthquake_repository::MockEarthquakeRepository;
