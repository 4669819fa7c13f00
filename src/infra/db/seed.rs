//! Seed data for development and testing.
//!
//! Reseeding is destructive: the schema is dropped and recreated so the
//! sample rows always come back with ids 1..=5.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use sea_orm_migration::MigratorTrait;

use super::migrations::Migrator;
use crate::infra::repositories::entities::earthquake;

/// A sample row inserted by [`reseed`].
pub struct SeedEarthquake {
    pub magnitude: f64,
    pub location: &'static str,
    pub year: i32,
}

/// The fixed sample set. Insertion order determines the assigned ids.
pub const SEED_EARTHQUAKES: &[SeedEarthquake] = &[
    SeedEarthquake {
        magnitude: 9.5,
        location: "Chile",
        year: 1960,
    },
    SeedEarthquake {
        magnitude: 9.2,
        location: "Alaska",
        year: 1964,
    },
    SeedEarthquake {
        magnitude: 8.6,
        location: "Alaska",
        year: 1946,
    },
    SeedEarthquake {
        magnitude: 8.3,
        location: "California",
        year: 1906,
    },
    SeedEarthquake {
        magnitude: 8.1,
        location: "Mexico",
        year: 2017,
    },
];

/// Drop and recreate the schema, then insert the sample rows.
///
/// Returns the number of rows in the table afterwards.
pub async fn reseed(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Migrator::fresh(db).await?;

    let rows = SEED_EARTHQUAKES.iter().map(|quake| earthquake::ActiveModel {
        magnitude: Set(quake.magnitude),
        location: Set(quake.location.to_string()),
        year: Set(quake.year),
        ..Default::default()
    });

    earthquake::Entity::insert_many(rows).exec(db).await?;

    earthquake::Entity::find().count(db).await
}
