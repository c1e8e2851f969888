use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_store::Store;

static FK_CHECK_RECORD_STORE_ID: &str = "fk_check_record_store_id";
static IDX_CHECK_RECORD_KEY: &str = "idx_check_record_store_product_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(CheckRecord::Id))
                    .col(integer(CheckRecord::StoreId))
                    .col(string(CheckRecord::ProductName))
                    .col(date(CheckRecord::CheckDate))
                    .col(boolean(CheckRecord::IsPresent))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHECK_RECORD_STORE_ID)
                            .from(CheckRecord::Table, CheckRecord::StoreId)
                            .to(Store::Table, Store::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHECK_RECORD_KEY)
                    .table(CheckRecord::Table)
                    .col(CheckRecord::StoreId)
                    .col(CheckRecord::ProductName)
                    .col(CheckRecord::CheckDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHECK_RECORD_KEY)
                    .table(CheckRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CheckRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CheckRecord {
    Table,
    Id,
    StoreId,
    ProductName,
    CheckDate,
    IsPresent,
}
