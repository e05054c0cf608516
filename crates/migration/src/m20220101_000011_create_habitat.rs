//! Create `habitat` table.
//!
//! Keyed by habitat name; referenced by `species.habitat`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Habitat::Table)
                    .if_not_exists()
                    .col(string(Habitat::Habitat).primary_key())
                    .col(double(Habitat::Temperature))
                    .col(double(Habitat::Humidity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Habitat::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Habitat { Table, Habitat, Temperature, Humidity }
