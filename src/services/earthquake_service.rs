//! Earthquake service - Handles earthquake lookup business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Earthquake;
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::EarthquakeRepository;

/// Earthquake service trait for dependency injection.
#[async_trait]
pub trait EarthquakeService: Send + Sync {
    /// Get a record by id, or `EarthquakeNotFound` if absent
    async fn get_earthquake(&self, id: i32) -> AppResult<Earthquake>;

    /// All records with magnitude >= threshold, ascending by id
    async fn find_by_min_magnitude(&self, threshold: f64) -> AppResult<Vec<Earthquake>>;
}

/// Concrete implementation of EarthquakeService using repository.
pub struct EarthquakeManager {
    repo: Arc<dyn EarthquakeRepository>,
}

impl EarthquakeManager {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn EarthquakeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EarthquakeService for EarthquakeManager {
    async fn get_earthquake(&self, id: i32) -> AppResult<Earthquake> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::EarthquakeNotFound { id })
    }

    async fn find_by_min_magnitude(&self, threshold: f64) -> AppResult<Vec<Earthquake>> {
        self.repo.find_by_min_magnitude(threshold).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::infra::repositories::MockEarthquakeRepository;

    fn sample_quake(id: i32) -> Earthquake {
        Earthquake {
            id,
            magnitude: 9.5,
            location: "Chile".to_string(),
            year: 1960,
        }
    }

    #[tokio::test]
    async fn get_earthquake_returns_record_when_found() {
        let mut repo = MockEarthquakeRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(sample_quake(id))));

        let service = EarthquakeManager::new(Arc::new(repo));
        let quake = service.get_earthquake(1).await.unwrap();

        assert_eq!(quake.id, 1);
        assert_eq!(quake.location, "Chile");
        assert_eq!(quake.year, 1960);
    }

    #[tokio::test]
    async fn get_earthquake_maps_absent_row_to_not_found() {
        let mut repo = MockEarthquakeRepository::new();
        repo.expect_find_by_id()
            .with(eq(9999))
            .times(1)
            .returning(|_| Ok(None));

        let service = EarthquakeManager::new(Arc::new(repo));
        let err = service.get_earthquake(9999).await.unwrap_err();

        match err {
            AppError::EarthquakeNotFound { id } => assert_eq!(id, 9999),
            other => panic!("expected EarthquakeNotFound, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Earthquake 9999 not found.");
    }

    #[tokio::test]
    async fn find_by_min_magnitude_passes_threshold_through() {
        let mut repo = MockEarthquakeRepository::new();
        repo.expect_find_by_min_magnitude()
            .with(eq(9.0))
            .times(1)
            .returning(|_| Ok(vec![sample_quake(1), sample_quake(2)]));

        let service = EarthquakeManager::new(Arc::new(repo));
        let quakes = service.find_by_min_magnitude(9.0).await.unwrap();

        assert_eq!(quakes.len(), 2);
    }

    #[tokio::test]
    async fn find_by_min_magnitude_returns_empty_list_when_nothing_matches() {
        let mut repo = MockEarthquakeRepository::new();
        repo.expect_find_by_min_magnitude()
            .with(eq(10.0))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = EarthquakeManager::new(Arc::new(repo));
        let quakes = service.find_by_min_magnitude(10.0).await.unwrap();

        assert!(quakes.is_empty());
    }
}
