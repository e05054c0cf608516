//! Create `animal` table with FKs to `species` and `zoo`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animal::Table)
                    .if_not_exists()
                    .col(pk_auto(Animal::AnimalId))
                    .col(string(Animal::SpeciesName))
                    .col(integer(Animal::ZooId))
                    .col(string(Animal::Name))
                    .col(double(Animal::Age))
                    .col(string(Animal::Gender))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animal_species")
                            .from(Animal::Table, Animal::SpeciesName)
                            .to(Species::Table, Species::SpeciesName)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animal_zoo")
                            .from(Animal::Table, Animal::ZooId)
                            .to(Zoo::Table, Zoo::ZooId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animal { Table, AnimalId, SpeciesName, ZooId, Name, Age, Gender }

#[derive(DeriveIden)]
enum Species { Table, SpeciesName }

#[derive(DeriveIden)]
enum Zoo { Table, ZooId }
