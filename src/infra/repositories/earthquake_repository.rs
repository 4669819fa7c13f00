//! Earthquake repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::earthquake::{self, Entity as EarthquakeEntity};
use crate::domain::Earthquake;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Earthquake repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EarthquakeRepository: Send + Sync {
    /// Find a record by its primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Earthquake>>;

    /// Find all records with magnitude >= threshold, ordered by id
    async fn find_by_min_magnitude(&self, threshold: f64) -> AppResult<Vec<Earthquake>>;
}

/// Concrete implementation of EarthquakeRepository over SeaORM
pub struct EarthquakeStore {
    db: DatabaseConnection,
}

impl EarthquakeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EarthquakeRepository for EarthquakeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Earthquake>> {
        let result = EarthquakeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Earthquake::from))
    }

    async fn find_by_min_magnitude(&self, threshold: f64) -> AppResult<Vec<Earthquake>> {
        let models = EarthquakeEntity::find()
            .filter(earthquake::Column::Magnitude.gte(threshold))
            .order_by_asc(earthquake::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Earthquake::from).collect())
    }
}
