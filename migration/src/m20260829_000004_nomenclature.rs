use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_store::Store;

static FK_NOMENCLATURE_STORE_ID: &str = "fk_nomenclature_store_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Nomenclature::Table)
                    .if_not_exists()
                    .col(pk_auto(Nomenclature::Id))
                    .col(integer(Nomenclature::StoreId))
                    .col(string(Nomenclature::ProductName))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOMENCLATURE_STORE_ID)
                            .from(Nomenclature::Table, Nomenclature::StoreId)
                            .to(Store::Table, Store::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Nomenclature::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Nomenclature {
    Table,
    Id,
    StoreId,
    ProductName,
}
