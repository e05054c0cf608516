//! Create `species` table with FK to `habitat`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(string(Species::SpeciesName).primary_key())
                    .col(string(Species::Food))
                    .col(string(Species::Habitat))
                    // A habitat still in use cannot be removed.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_habitat")
                            .from(Species::Table, Species::Habitat)
                            .to(Habitat::Table, Habitat::Habitat)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Species::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Species { Table, SpeciesName, Food, Habitat }

#[derive(DeriveIden)]
enum Habitat { Table, Habitat }
