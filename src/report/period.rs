use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::error::{Error, ReportError, ValidationError};
use crate::report::{price_field, stock_field, yes_no};
use crate::util::time::report_timestamp;

/// One row of a period report: a check record enriched with its catalog
/// context and the price record sharing its key, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReportRow {
    pub check_date: NaiveDate,
    pub region_name: String,
    pub network_name: String,
    pub store_number: String,
    pub store_address: Option<String>,
    pub product_name: String,
    pub is_present: bool,
    pub regular_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub has_promo: bool,
    pub stock_quantity: Option<i32>,
}

/// Every check in `[start_date, end_date]` inclusive, ordered by date, then
/// store, then product.
#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rows: Vec<PeriodReportRow>,
}

const PERIOD_HEADER: [&str; 11] = [
    "Date",
    "Region",
    "Network",
    "Store",
    "Address",
    "Product",
    "Present",
    "Regular price",
    "Promo price",
    "Has promo",
    "Stock",
];

impl PeriodReport {
    /// Write the machine-oriented form: a header row plus data rows, nothing
    /// else.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv = csv::Writer::from_writer(writer);
        self.write_rows(&mut csv)?;
        csv.flush()?;

        Ok(())
    }

    /// Write the human-readable export: the CSV block followed by a trailing
    /// summary with the total row count and the period bounds.
    pub fn write_csv_with_summary<W: Write>(&self, mut writer: W) -> Result<(), ReportError> {
        {
            let mut csv = csv::Writer::from_writer(&mut writer);
            self.write_rows(&mut csv)?;
            csv.flush()?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total checks: {}", self.rows.len())?;
        writeln!(writer, "Period: {} to {}", self.start_date, self.end_date)?;

        Ok(())
    }

    fn write_rows<W: Write>(&self, csv: &mut csv::Writer<W>) -> Result<(), ReportError> {
        csv.write_record(PERIOD_HEADER)?;

        for row in &self.rows {
            let date = row.check_date.to_string();
            let regular = price_field(row.regular_price);
            let promo = price_field(row.promo_price);
            let stock = stock_field(row.stock_quantity);

            csv.write_record([
                date.as_str(),
                row.region_name.as_str(),
                row.network_name.as_str(),
                row.store_number.as_str(),
                row.store_address.as_deref().unwrap_or_default(),
                row.product_name.as_str(),
                yes_no(row.is_present),
                regular.as_str(),
                promo.as_str(),
                yes_no(row.has_promo),
                stock.as_str(),
            ])?;
        }

        Ok(())
    }

    /// Write the human-readable export under `dir` with a timestamped file
    /// name and return its path for the delivery channel.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;

        let filename = format!(
            "period_{}_{}_{}.csv",
            self.start_date,
            self.end_date,
            report_timestamp()
        );
        let path = dir.join(filename);

        let file = File::create(&path)?;
        self.write_csv_with_summary(file)?;

        tracing::info!(path = %path.display(), "period report written");

        Ok(path)
    }

    /// Human-readable caption to accompany the artifact when delivered.
    pub fn caption(&self) -> String {
        format!(
            "Check report for {} to {}: {} checks",
            self.start_date,
            self.end_date,
            self.rows.len()
        )
    }
}

/// Build the report covering every check record in `[start_date, end_date]`.
///
/// Rows are enriched with region name, network name, and store number and
/// address by joining up the catalog hierarchy; check records whose store has
/// no catalog entry are skipped, since they cannot be attributed. Price fields
/// come from the price record sharing the (store, product, date) key and are
/// blank when no capture exists.
pub async fn build_period_report<C: ConnectionTrait>(
    db: &C,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<PeriodReport, Error> {
    if start_date > end_date {
        return Err(ValidationError::InvalidPeriod {
            start: start_date,
            end: end_date,
        }
        .into());
    }

    let checks = entity::prelude::CheckRecord::find()
        .filter(entity::check_record::Column::CheckDate.between(start_date, end_date))
        .order_by_asc(entity::check_record::Column::CheckDate)
        .order_by_asc(entity::check_record::Column::StoreId)
        .order_by_asc(entity::check_record::Column::ProductName)
        .all(db)
        .await?;

    let store_ids: Vec<i32> = {
        let mut ids: Vec<i32> = checks.iter().map(|check| check.store_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    };

    let stores: HashMap<i32, entity::store::Model> = entity::prelude::Store::find()
        .filter(entity::store::Column::Id.is_in(store_ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|store| (store.id, store))
        .collect();

    let networks: HashMap<i32, entity::network::Model> = entity::prelude::Network::find()
        .filter(
            entity::network::Column::Id.is_in(stores.values().map(|store| store.network_id)),
        )
        .all(db)
        .await?
        .into_iter()
        .map(|network| (network.id, network))
        .collect();

    let regions: HashMap<i32, entity::region::Model> = entity::prelude::Region::find()
        .filter(
            entity::region::Column::Id.is_in(networks.values().map(|network| network.region_id)),
        )
        .all(db)
        .await?
        .into_iter()
        .map(|region| (region.id, region))
        .collect();

    let prices: HashMap<(i32, String, NaiveDate), entity::price_record::Model> =
        entity::prelude::PriceRecord::find()
            .filter(entity::price_record::Column::StoreId.is_in(store_ids.iter().copied()))
            .filter(entity::price_record::Column::CheckDate.between(start_date, end_date))
            .all(db)
            .await?
            .into_iter()
            .map(|price| {
                (
                    (price.store_id, price.product_name.clone(), price.check_date),
                    price,
                )
            })
            .collect();

    let mut rows = Vec::with_capacity(checks.len());

    for check in checks {
        let Some(store) = stores.get(&check.store_id) else {
            continue;
        };
        let network = networks.get(&store.network_id);
        let region = network.and_then(|network| regions.get(&network.region_id));

        let price = prices.get(&(check.store_id, check.product_name.clone(), check.check_date));

        rows.push(PeriodReportRow {
            check_date: check.check_date,
            region_name: region.map(|r| r.name.clone()).unwrap_or_default(),
            network_name: network.map(|n| n.name.clone()).unwrap_or_default(),
            store_number: store.number.clone(),
            store_address: store.address.clone(),
            product_name: check.product_name,
            is_present: check.is_present,
            regular_price: price.and_then(|p| p.regular_price),
            promo_price: price.and_then(|p| p.promo_price),
            has_promo: price.is_some_and(|p| p.has_promo),
            stock_quantity: price.and_then(|p| p.stock_quantity),
        });
    }

    Ok(PeriodReport {
        start_date,
        end_date,
        rows,
    })
}
