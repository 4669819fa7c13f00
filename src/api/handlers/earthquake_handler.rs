//! Earthquake lookup handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::domain::EarthquakeResponse;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Response body for the minimum-magnitude query
#[derive(Debug, Serialize, ToSchema)]
pub struct MagnitudeQueryResponse {
    /// Number of matching records
    #[schema(example = 2)]
    pub count: usize,
    /// Matching records, ascending by id
    pub quakes: Vec<EarthquakeResponse>,
}

/// Create earthquake routes
pub fn earthquake_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_earthquake))
        .route("/magnitude/:magnitude", get(get_earthquakes_by_magnitude))
}

/// Get a single earthquake record by id
#[utoipa::path(
    get,
    path = "/earthquakes/{id}",
    tag = "Earthquakes",
    params(
        ("id" = i32, Path, description = "Earthquake record id")
    ),
    responses(
        (status = 200, description = "Earthquake record", body = EarthquakeResponse),
        (status = 404, description = "No record with that id", body = MessageResponse)
    )
)]
pub async fn get_earthquake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EarthquakeResponse>> {
    let quake = state.earthquake_service.get_earthquake(id).await?;
    Ok(Json(EarthquakeResponse::from(quake)))
}

/// List earthquake records at or above a magnitude threshold
#[utoipa::path(
    get,
    path = "/earthquakes/magnitude/{magnitude}",
    tag = "Earthquakes",
    params(
        ("magnitude" = f64, Path, description = "Minimum magnitude (inclusive)")
    ),
    responses(
        (status = 200, description = "Match count and records", body = MagnitudeQueryResponse)
    )
)]
pub async fn get_earthquakes_by_magnitude(
    State(state): State<AppState>,
    Path(magnitude): Path<f64>,
) -> AppResult<Json<MagnitudeQueryResponse>> {
    let quakes = state
        .earthquake_service
        .find_by_min_magnitude(magnitude)
        .await?;

    Ok(Json(MagnitudeQueryResponse {
        count: quakes.len(),
        quakes: quakes.into_iter().map(EarthquakeResponse::from).collect(),
    }))
}
