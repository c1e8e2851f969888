use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000002_network::Network;

static FK_STORE_NETWORK_ID: &str = "fk_store_network_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(pk_auto(Store::Id))
                    .col(string(Store::Number))
                    .col(string_null(Store::Address))
                    .col(integer(Store::NetworkId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STORE_NETWORK_ID)
                            .from(Store::Table, Store::NetworkId)
                            .to(Network::Table, Network::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Store::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Store {
    Table,
    Id,
    Number,
    Address,
    NetworkId,
}
