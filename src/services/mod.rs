//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod earthquake_service;

pub use earthquake_service::{EarthquakeManager, EarthquakeService};
