pub use sea_orm_migration::prelude::*;

mod m20260829_000001_region;
mod m20260829_000002_network;
mod m20260829_000003_store;
mod m20260829_000004_nomenclature;
mod m20260829_000005_check_record;
mod m20260829_000006_price_record;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_region::Migration),
            Box::new(m20260829_000002_network::Migration),
            Box::new(m20260829_000003_store::Migration),
            Box::new(m20260829_000004_nomenclature::Migration),
            Box::new(m20260829_000005_check_record::Migration),
            Box::new(m20260829_000006_price_record::Migration),
        ]
    }
}
