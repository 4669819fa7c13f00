//! Seed command - Resets the schema and inserts the sample rows.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::db::seed;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::warn!("Reseeding drops and recreates the earthquakes table");

    let db = Database::connect_without_migrations(&config.database_url).await?;
    let count = seed::reseed(db.connection()).await?;

    tracing::info!("Seed complete: {} earthquakes", count);
    println!("Seeded {} earthquakes", count);

    Ok(())
}
