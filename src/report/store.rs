use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::error::{Error, ReportError};
use crate::report::{price_field, stock_field, yes_no};
use crate::util::time::report_timestamp;

/// One row of a single-store report: a check record enriched with the price
/// record sharing its key, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreReportRow {
    pub product_name: String,
    pub is_present: bool,
    pub regular_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub has_promo: bool,
    pub stock_quantity: Option<i32>,
}

/// Check results for one store on one date, one row per check record, ordered
/// by product name.
#[derive(Debug, Clone)]
pub struct StoreReport {
    pub store_id: i32,
    pub report_date: NaiveDate,
    pub rows: Vec<StoreReportRow>,
}

impl StoreReport {
    /// Number of products marked present.
    pub fn present_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_present).count()
    }

    /// Write the report as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Product",
            "Present",
            "Regular price",
            "Promo price",
            "Has promo",
            "Stock",
        ])?;

        for row in &self.rows {
            let regular = price_field(row.regular_price);
            let promo = price_field(row.promo_price);
            let stock = stock_field(row.stock_quantity);

            csv.write_record([
                row.product_name.as_str(),
                yes_no(row.is_present),
                regular.as_str(),
                promo.as_str(),
                yes_no(row.has_promo),
                stock.as_str(),
            ])?;
        }

        csv.flush()?;

        Ok(())
    }

    /// Write the CSV artifact under `dir` with a timestamped file name and
    /// return its path for the delivery channel.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;

        let filename = format!(
            "store_{}_{}_{}.csv",
            self.store_id,
            self.report_date,
            report_timestamp()
        );
        let path = dir.join(filename);

        let file = File::create(&path)?;
        self.write_csv(file)?;

        tracing::info!(store_id = self.store_id, path = %path.display(), "store report written");

        Ok(path)
    }

    /// Human-readable caption to accompany the artifact when delivered.
    pub fn caption(&self) -> String {
        format!(
            "Store {} check report for {}: {}/{} products present",
            self.store_id,
            self.report_date,
            self.present_count(),
            self.rows.len()
        )
    }
}

/// Build the report for one store and date.
///
/// Returns `Ok(None)` when the store has no check records for that date; the
/// caller distinguishes "no data" from failure. An unknown store id also
/// yields `None`, since it cannot have records.
pub async fn build_store_report<C: ConnectionTrait>(
    db: &C,
    store_id: i32,
    report_date: NaiveDate,
) -> Result<Option<StoreReport>, Error> {
    let checks = entity::prelude::CheckRecord::find()
        .filter(entity::check_record::Column::StoreId.eq(store_id))
        .filter(entity::check_record::Column::CheckDate.eq(report_date))
        .order_by_asc(entity::check_record::Column::ProductName)
        .all(db)
        .await?;

    if checks.is_empty() {
        return Ok(None);
    }

    let prices: HashMap<String, entity::price_record::Model> = entity::prelude::PriceRecord::find()
        .filter(entity::price_record::Column::StoreId.eq(store_id))
        .filter(entity::price_record::Column::CheckDate.eq(report_date))
        .all(db)
        .await?
        .into_iter()
        .map(|price| (price.product_name.clone(), price))
        .collect();

    let rows = checks
        .into_iter()
        .map(|check| {
            let price = prices.get(&check.product_name);

            StoreReportRow {
                product_name: check.product_name,
                is_present: check.is_present,
                regular_price: price.and_then(|p| p.regular_price),
                promo_price: price.and_then(|p| p.promo_price),
                has_promo: price.is_some_and(|p| p.has_promo),
                stock_quantity: price.and_then(|p| p.stock_quantity),
            }
        })
        .collect();

    Ok(Some(StoreReport {
        store_id,
        report_date,
        rows,
    }))
}
