//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::earthquake_handler;
use crate::domain::EarthquakeResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Earthquake API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Earthquake API",
        version = "0.1.0",
        description = "Read-only lookup API over a seeded table of historic earthquakes",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        earthquake_handler::get_earthquake,
        earthquake_handler::get_earthquakes_by_magnitude,
    ),
    components(
        schemas(
            EarthquakeResponse,
            MessageResponse,
            earthquake_handler::MagnitudeQueryResponse,
        )
    ),
    tags(
        (name = "Earthquakes", description = "Earthquake record lookups")
    )
)]
pub struct ApiDoc;
