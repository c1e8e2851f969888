//! Catalog database insertion utilities.
//!
//! This module provides methods for inserting catalog records into the test
//! database. Insertions are find-or-create so fixtures can be layered without
//! tripping over unique constraints.

use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::catalog::CatalogFixtures,
    model::{NetworkModel, NomenclatureModel, RegionModel, StoreModel},
};

impl<'a> CatalogFixtures<'a> {
    /// Insert a region into the test database.
    ///
    /// If a region with the given name already exists, returns the existing
    /// record instead of creating a duplicate.
    pub async fn insert_region(&self, name: &str) -> Result<RegionModel, TestError> {
        if let Some(existing) = entity::prelude::Region::find()
            .filter(entity::region::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Region::insert(entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a network belonging to the given region.
    pub async fn insert_network(
        &self,
        name: &str,
        region_id: i32,
    ) -> Result<NetworkModel, TestError> {
        Ok(entity::prelude::Network::insert(entity::network::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region_id: ActiveValue::Set(region_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a store belonging to the given network.
    pub async fn insert_store(
        &self,
        number: &str,
        address: Option<&str>,
        network_id: i32,
    ) -> Result<StoreModel, TestError> {
        Ok(entity::prelude::Store::insert(entity::store::ActiveModel {
            number: ActiveValue::Set(number.to_string()),
            address: ActiveValue::Set(address.map(str::to_string)),
            network_id: ActiveValue::Set(network_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert nomenclature entries for a store, one per product name.
    pub async fn insert_nomenclature(
        &self,
        store_id: i32,
        products: &[&str],
    ) -> Result<Vec<NomenclatureModel>, TestError> {
        let entries = products
            .iter()
            .map(|product| entity::nomenclature::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product.to_string()),
                ..Default::default()
            });

        Ok(entity::prelude::Nomenclature::insert_many(entries)
            .exec_with_returning_many(&self.setup.db)
            .await?)
    }

    /// Insert a region, a network, and a store in one call.
    ///
    /// Convenience for ledger and report tests that only need a valid store to
    /// hang records from. The region and network carry fixed test names, so
    /// repeated calls share one region.
    pub async fn insert_store_tree(
        &self,
        number: &str,
    ) -> Result<(RegionModel, NetworkModel, StoreModel), TestError> {
        let region = self.insert_region("Test Region").await?;
        let network = self.insert_network("Test Network", region.id).await?;
        let store = self
            .insert_store(number, Some("1 Test Street"), network.id)
            .await?;

        Ok((region, network, store))
    }
}
