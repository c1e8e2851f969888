use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_region::Region;

static FK_NETWORK_REGION_ID: &str = "fk_network_region_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Network::Table)
                    .if_not_exists()
                    .col(pk_auto(Network::Id))
                    .col(string(Network::Name))
                    .col(integer(Network::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NETWORK_REGION_ID)
                            .from(Network::Table, Network::RegionId)
                            .to(Region::Table, Region::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Network::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Network {
    Table,
    Id,
    Name,
    RegionId,
}
