use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261012_000001_create_customer_table::Customers;

static IDX_CUSTOMER_ADDRESSES_CUSTOMER_ID: &str = "idx_customer_addresses_customer_id";
static FK_CUSTOMER_ADDRESSES_CUSTOMER_ID: &str = "fk_customer_addresses_customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAddresses::Table)
                    .if_not_exists()
                    .col(pk_uuid(CustomerAddresses::Id))
                    .col(uuid(CustomerAddresses::CustomerId))
                    .col(string(CustomerAddresses::Street))
                    .col(string(CustomerAddresses::City))
                    .col(string(CustomerAddresses::PostalCode))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CUSTOMER_ADDRESSES_CUSTOMER_ID)
                            .from(CustomerAddresses::Table, CustomerAddresses::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_ADDRESSES_CUSTOMER_ID)
                    .table(CustomerAddresses::Table)
                    .col(CustomerAddresses::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_ADDRESSES_CUSTOMER_ID)
                    .table(CustomerAddresses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerAddresses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CustomerAddresses {
    Table,
    Id,
    CustomerId,
    Street,
    City,
    PostalCode,
}
