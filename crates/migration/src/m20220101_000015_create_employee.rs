//! Create `employee` table with FK to `zoo`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::EmpId))
                    .col(integer(Employee::ZooId))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::LastName))
                    .col(string(Employee::JobTitle))
                    .col(string(Employee::JobDescription))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_zoo")
                            .from(Employee::Table, Employee::ZooId)
                            .to(Zoo::Table, Zoo::ZooId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, EmpId, ZooId, FirstName, LastName, JobTitle, JobDescription }

#[derive(DeriveIden)]
enum Zoo { Table, ZooId }
