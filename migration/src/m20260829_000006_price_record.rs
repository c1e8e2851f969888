use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_store::Store;

static FK_PRICE_RECORD_STORE_ID: &str = "fk_price_record_store_id";
static IDX_PRICE_RECORD_KEY: &str = "idx_price_record_store_product_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(PriceRecord::Id))
                    .col(integer(PriceRecord::StoreId))
                    .col(string(PriceRecord::ProductName))
                    .col(date(PriceRecord::CheckDate))
                    .col(double_null(PriceRecord::RegularPrice))
                    .col(double_null(PriceRecord::PromoPrice))
                    .col(boolean(PriceRecord::HasPromo))
                    .col(integer_null(PriceRecord::StockQuantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRICE_RECORD_STORE_ID)
                            .from(PriceRecord::Table, PriceRecord::StoreId)
                            .to(Store::Table, Store::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRICE_RECORD_KEY)
                    .table(PriceRecord::Table)
                    .col(PriceRecord::StoreId)
                    .col(PriceRecord::ProductName)
                    .col(PriceRecord::CheckDate)
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
                    .name(IDX_PRICE_RECORD_KEY)
                    .table(PriceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PriceRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PriceRecord {
    Table,
    Id,
    StoreId,
    ProductName,
    CheckDate,
    RegularPrice,
    PromoPrice,
    HasPromo,
    StockQuantity,
}
