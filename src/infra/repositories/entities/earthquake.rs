//! Earthquake database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Earthquake;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "earthquakes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub magnitude: f64,
    pub location: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Earthquake {
    fn from(model: Model) -> Self {
        Earthquake {
            id: model.id,
            magnitude: model.magnitude,
            location: model.location,
            year: model.year,
        }
    }
}
