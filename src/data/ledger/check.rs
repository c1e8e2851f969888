use std::collections::HashSet;

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, TransactionError, TransactionTrait,
};

use crate::error::{Error, ValidationError};

pub struct CheckRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CheckRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replace the check records for a store and date with a fresh set.
    ///
    /// Deletes every existing record for `(store_id, check_date)`, then
    /// inserts one record per product in `expected` with `is_present` set from
    /// membership in `present`. Names in `present` that are not in `expected`
    /// are never written. An empty `expected` list clears the slate.
    ///
    /// Runs against whatever connection it is given; callers that need the
    /// delete and insert to commit atomically must pass a transaction, or use
    /// [`record_checks`] which opens one.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of records written
    /// - `Err(DbErr)` - Delete or insert failed
    pub async fn replace_for_date(
        &self,
        store_id: i32,
        expected: &[String],
        present: &HashSet<String>,
        check_date: NaiveDate,
    ) -> Result<usize, DbErr> {
        entity::prelude::CheckRecord::delete_many()
            .filter(entity::check_record::Column::StoreId.eq(store_id))
            .filter(entity::check_record::Column::CheckDate.eq(check_date))
            .exec(self.db)
            .await?;

        if expected.is_empty() {
            return Ok(0);
        }

        let records = expected
            .iter()
            .map(|product| entity::check_record::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                product_name: ActiveValue::Set(product.clone()),
                check_date: ActiveValue::Set(check_date),
                is_present: ActiveValue::Set(present.contains(product)),
                ..Default::default()
            });

        entity::prelude::CheckRecord::insert_many(records)
            .exec(self.db)
            .await?;

        Ok(expected.len())
    }

    /// Product names marked present for a store on a date; empty set when no
    /// records exist.
    pub async fn get_present_products(
        &self,
        store_id: i32,
        check_date: NaiveDate,
    ) -> Result<HashSet<String>, DbErr> {
        let products = entity::prelude::CheckRecord::find()
            .select_only()
            .column(entity::check_record::Column::ProductName)
            .filter(entity::check_record::Column::StoreId.eq(store_id))
            .filter(entity::check_record::Column::CheckDate.eq(check_date))
            .filter(entity::check_record::Column::IsPresent.eq(true))
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        Ok(products.into_iter().collect())
    }

    /// Ids of every store with at least one check record on a date, regardless
    /// of presence value.
    pub async fn get_checked_store_ids(
        &self,
        check_date: NaiveDate,
    ) -> Result<HashSet<i32>, DbErr> {
        let store_ids = entity::prelude::CheckRecord::find()
            .select_only()
            .column(entity::check_record::Column::StoreId)
            .distinct()
            .filter(entity::check_record::Column::CheckDate.eq(check_date))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(store_ids.into_iter().collect())
    }
}

/// Record one store's checklist submission for a date.
///
/// Transactional wrapper over [`CheckRepository::replace_for_date`]: the
/// delete and insert commit as a single unit, so a failure leaves the prior
/// state intact and concurrent submissions for the same store and date cannot
/// interleave. Repeating the same call yields the same final state.
///
/// # Arguments
/// - `db` - Live database connection; the transaction is opened here
/// - `store_id` - Store the checklist belongs to
/// - `expected` - Every product the inspector was asked to check
/// - `present` - Subset of products found on the shelf
/// - `check_date` - Inspection date
///
/// # Returns
/// - `Ok(())` - All records committed
/// - `Err(Error::Validation)` - A product name was blank
/// - `Err(Error::Db)` - The storage engine failed; nothing was written
pub async fn record_checks(
    db: &DatabaseConnection,
    store_id: i32,
    expected: Vec<String>,
    present: HashSet<String>,
    check_date: NaiveDate,
) -> Result<(), Error> {
    if expected.iter().any(|product| product.trim().is_empty()) {
        return Err(ValidationError::BlankProductName.into());
    }

    let present_count = present.len();
    let expected_count = expected.len();

    let result = db
        .transaction::<_, usize, DbErr>(|txn| {
            Box::pin(async move {
                CheckRepository::new(txn)
                    .replace_for_date(store_id, &expected, &present, check_date)
                    .await
            })
        })
        .await;

    match result {
        Ok(_) => {
            tracing::info!(
                store_id,
                %check_date,
                "recorded check results: {present_count}/{expected_count} present"
            );
            Ok(())
        }
        Err(TransactionError::Connection(err)) | Err(TransactionError::Transaction(err)) => {
            tracing::error!(store_id, %check_date, "failed to record check results: {err}");
            Err(err.into())
        }
    }
}
