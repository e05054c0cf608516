use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Animal: lookups by species and by zoo
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_animal_species")
                    .table(Animal::Table)
                    .col(Animal::SpeciesName)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_animal_zoo")
                    .table(Animal::Table)
                    .col(Animal::ZooId)
                    .to_owned(),
            )
            .await?;

        // Employee: listing per zoo
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_zoo")
                    .table(Employee::Table)
                    .col(Employee::ZooId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_animal_species").table(Animal::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_animal_zoo").table(Animal::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employee_zoo").table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Animal { Table, SpeciesName, ZooId }

#[derive(DeriveIden)]
enum Employee { Table, ZooId }
