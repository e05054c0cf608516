//! Create `zoo` table.
//!
//! Root entity for animals and employees.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Zoo::Table)
                    .if_not_exists()
                    .col(pk_auto(Zoo::ZooId))
                    .col(string(Zoo::Name))
                    .col(string(Zoo::Location))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Zoo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Zoo { Table, ZooId, Name, Location }
