use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

/// Price and stock fields captured for one product during an inspection.
///
/// All fields are optional except the promo flag; inspectors skip what they
/// cannot read off the shelf label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCapture {
    pub regular_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub has_promo: bool,
    pub stock_quantity: Option<i32>,
}

pub struct PriceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PriceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert or replace the price record for `(store_id, product_name, check_date)`.
    ///
    /// A second capture for the same key overwrites the first; price records
    /// are independent of check records sharing the key.
    pub async fn upsert(
        &self,
        store_id: i32,
        product_name: &str,
        check_date: NaiveDate,
        capture: PriceCapture,
    ) -> Result<entity::price_record::Model, DbErr> {
        let existing = self.get(store_id, product_name, check_date).await?;

        let mut record = match existing {
            Some(model) => model.into_active_model(),
            None => entity::price_record::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product_name.to_string()),
                check_date: ActiveValue::Set(check_date),
                ..Default::default()
            },
        };

        record.regular_price = ActiveValue::Set(capture.regular_price);
        record.promo_price = ActiveValue::Set(capture.promo_price);
        record.has_promo = ActiveValue::Set(capture.has_promo);
        record.stock_quantity = ActiveValue::Set(capture.stock_quantity);

        match record.id {
            ActiveValue::Unchanged(_) => {
                entity::prelude::PriceRecord::update(record).exec(self.db).await
            }
            _ => {
                entity::prelude::PriceRecord::insert(record)
                    .exec_with_returning(self.db)
                    .await
            }
        }
    }

    /// Price record for the exact `(store_id, product_name, check_date)` key.
    pub async fn get(
        &self,
        store_id: i32,
        product_name: &str,
        check_date: NaiveDate,
    ) -> Result<Option<entity::price_record::Model>, DbErr> {
        entity::prelude::PriceRecord::find()
            .filter(entity::price_record::Column::StoreId.eq(store_id))
            .filter(entity::price_record::Column::ProductName.eq(product_name))
            .filter(entity::price_record::Column::CheckDate.eq(check_date))
            .one(self.db)
            .await
    }

    /// Most recent price capture for a product across every store in a
    /// network.
    ///
    /// Recency is well-defined: latest check date wins, ties broken by lowest
    /// store id. An earlier version of this lookup returned whichever store
    /// iteration happened to visit first; ordering in the query fixes that.
    pub async fn get_last_in_network(
        &self,
        network_id: i32,
        product_name: &str,
    ) -> Result<Option<entity::price_record::Model>, DbErr> {
        entity::prelude::PriceRecord::find()
            .inner_join(entity::prelude::Store)
            .filter(entity::store::Column::NetworkId.eq(network_id))
            .filter(entity::price_record::Column::ProductName.eq(product_name))
            .order_by_desc(entity::price_record::Column::CheckDate)
            .order_by_asc(entity::price_record::Column::StoreId)
            .one(self.db)
            .await
    }
}
