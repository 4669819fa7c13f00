//! Earthquake domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Earthquake domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    pub id: i32,
    pub magnitude: f64,
    pub location: String,
    pub year: i32,
}

/// Earthquake response (shape returned to clients)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EarthquakeResponse {
    /// Unique record identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Place the earthquake occurred
    #[schema(example = "Chile")]
    pub location: String,
    /// Richter magnitude
    #[schema(example = 9.5)]
    pub magnitude: f64,
    /// Year the earthquake occurred
    #[schema(example = 1960)]
    pub year: i32,
}

impl From<Earthquake> for EarthquakeResponse {
    fn from(quake: Earthquake) -> Self {
        Self {
            id: quake.id,
            location: quake.location,
            magnitude: quake.magnitude,
            year: quake.year,
        }
    }
}
