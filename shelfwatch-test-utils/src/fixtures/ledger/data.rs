//! Ledger database insertion utilities.
//!
//! Direct row inserts for check and price records, bypassing the repository
//! layer so report and façade tests can seed exact ledger states.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::ledger::LedgerFixtures,
    model::{CheckRecordModel, PriceRecordModel},
};

impl<'a> LedgerFixtures<'a> {
    /// Insert a single check record.
    pub async fn insert_check(
        &self,
        store_id: i32,
        product_name: &str,
        check_date: NaiveDate,
        is_present: bool,
    ) -> Result<CheckRecordModel, TestError> {
        Ok(
            entity::prelude::CheckRecord::insert(entity::check_record::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product_name.to_string()),
                check_date: ActiveValue::Set(check_date),
                is_present: ActiveValue::Set(is_present),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a single price record.
    pub async fn insert_price(
        &self,
        store_id: i32,
        product_name: &str,
        check_date: NaiveDate,
        regular_price: Option<f64>,
        promo_price: Option<f64>,
        has_promo: bool,
        stock_quantity: Option<i32>,
    ) -> Result<PriceRecordModel, TestError> {
        Ok(
            entity::prelude::PriceRecord::insert(entity::price_record::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product_name.to_string()),
                check_date: ActiveValue::Set(check_date),
                regular_price: ActiveValue::Set(regular_price),
                promo_price: ActiveValue::Set(promo_price),
                has_promo: ActiveValue::Set(has_promo),
                stock_quantity: ActiveValue::Set(stock_quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
