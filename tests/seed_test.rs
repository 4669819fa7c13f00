//! Seeder integration tests.
//!
//! Reseeding must be idempotent: the table always ends up with exactly the
//! five sample rows and ids restarting at 1.

use sea_orm::ConnectOptions;

use quake_api::infra::db::seed::{self, SEED_EARTHQUAKES};
use quake_api::infra::{EarthquakeRepository, EarthquakeStore};

async fn connect() -> sea_orm::DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);
    sea_orm::Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite")
}

#[tokio::test]
async fn test_reseed_inserts_five_rows() {
    let db = connect().await;

    let count = seed::reseed(&db).await.unwrap();
    assert_eq!(count, 5);
}

#[tokio::test]
async fn test_reseed_twice_restarts_ids_at_one() {
    let db = connect().await;

    seed::reseed(&db).await.unwrap();
    let count = seed::reseed(&db).await.unwrap();
    assert_eq!(count, 5);

    // Ids are sequential from 1, in insertion order
    let store = EarthquakeStore::new(db.clone());
    let quakes = store.find_by_min_magnitude(0.0).await.unwrap();

    assert_eq!(quakes.len(), 5);
    for (i, quake) in quakes.iter().enumerate() {
        assert_eq!(quake.id, i as i32 + 1);
    }
}

#[tokio::test]
async fn test_reseed_contents_match_sample_set() {
    let db = connect().await;
    seed::reseed(&db).await.unwrap();

    let store = EarthquakeStore::new(db.clone());
    let quakes = store.find_by_min_magnitude(0.0).await.unwrap();

    assert_eq!(quakes.len(), SEED_EARTHQUAKES.len());
    for (quake, sample) in quakes.iter().zip(SEED_EARTHQUAKES) {
        assert_eq!(quake.magnitude, sample.magnitude);
        assert_eq!(quake.location, sample.location);
        assert_eq!(quake.year, sample.year);
    }
}
