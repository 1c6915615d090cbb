use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMPLOYEES_OFFICE_ID: &str = "idx_employees_office_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_uuid(Employees::Id))
                    // Offices live in the document store, so there is no foreign key here
                    .col(uuid(Employees::OfficeId))
                    .col(string(Employees::Name))
                    .col(string(Employees::Email))
                    .col(string(Employees::Phone))
                    .col(double(Employees::Salary))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEES_OFFICE_ID)
                    .table(Employees::Table)
                    .col(Employees::OfficeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEES_OFFICE_ID)
                    .table(Employees::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    Table,
    Id,
    OfficeId,
    Name,
    Email,
    Phone,
    Salary,
}
