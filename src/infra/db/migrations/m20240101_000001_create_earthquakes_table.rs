//! Migration: Create the earthquakes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Earthquakes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Earthquakes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Earthquakes::Magnitude).double().not_null())
                    .col(ColumnDef::new(Earthquakes::Location).string().not_null())
                    .col(ColumnDef::new(Earthquakes::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Index for the minimum-magnitude threshold query
        manager
            .create_index(
                Index::create()
                    .name("idx_earthquakes_magnitude")
                    .table(Earthquakes::Table)
                    .col(Earthquakes::Magnitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Earthquakes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Earthquakes {
    Table,
    Id,
    Magnitude,
    Location,
    Year,
}
