use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct NomenclatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NomenclatureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Product names expected at a store, sorted alphabetically.
    ///
    /// An unknown store yields an empty list, not an error.
    pub async fn list_products(&self, store_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Nomenclature::find()
            .select_only()
            .column(entity::nomenclature::Column::ProductName)
            .filter(entity::nomenclature::Column::StoreId.eq(store_id))
            .order_by_asc(entity::nomenclature::Column::ProductName)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Add expected products to a store's nomenclature.
    pub async fn add_products(
        &self,
        store_id: i32,
        products: &[String],
    ) -> Result<Vec<entity::nomenclature::Model>, DbErr> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let entries = products
            .iter()
            .map(|product| entity::nomenclature::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product.clone()),
                ..Default::default()
            });

        entity::prelude::Nomenclature::insert_many(entries)
            .exec_with_returning_many(self.db)
            .await
    }
}
