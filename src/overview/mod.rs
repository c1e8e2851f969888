//! Presentation-facing façade over the catalog and the check ledger.
//!
//! Thin composition: catalog stores annotated with their check status for a
//! date, plus the per-day progress summary the operator dashboard renders.
//! No logic here writes to the ledger.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::data::catalog::store::StoreRepository;
use crate::data::ledger::check::CheckRepository;
use crate::error::Error;


/// Whether a store has any check record for the date in question.
///
/// Callers depend on exactly these two values; a store with records where
/// every product is absent still counts as checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Checked,
    Pending,
}

/// A catalog store annotated with its check status for a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreOverview {
    pub id: i32,
    pub number: String,
    pub address: Option<String>,
    pub status: StoreStatus,
}

/// Per-store progress line in a daily summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreDailySummary {
    pub id: i32,
    pub number: String,
    pub address: Option<String>,
    pub network_name: String,
    pub total_checks: usize,
    pub present_items: usize,
    /// Share of checked products found present, one decimal place, 0 when the
    /// store has no checks.
    pub completion_rate: f64,
}

/// Check progress across every store inspected on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub stores: Vec<StoreDailySummary>,
    pub total_checks: usize,
    pub total_present: usize,
}

/// Stores of a network, each annotated `checked` or `pending` for the date.
///
/// Ordering follows the catalog listing (by store number).
pub async fn list_stores_with_status<C: ConnectionTrait>(
    db: &C,
    network_id: i32,
    check_date: NaiveDate,
) -> Result<Vec<StoreOverview>, Error> {
    let stores = StoreRepository::new(db).list_by_network(network_id).await?;
    let checked_ids = CheckRepository::new(db)
        .get_checked_store_ids(check_date)
        .await?;

    Ok(stores
        .into_iter()
        .map(|store| {
            let status = if checked_ids.contains(&store.id) {
                StoreStatus::Checked
            } else {
                StoreStatus::Pending
            };

            StoreOverview {
                id: store.id,
                number: store.number,
                address: store.address,
                status,
            }
        })
        .collect())
}

/// Summarize check progress for one date across all inspected stores.
///
/// Each store line carries its network name, check counts, and completion
/// percentage; stores are ordered by number. A date without checks yields an
/// empty summary with zero totals.
pub async fn daily_summary<C: ConnectionTrait>(
    db: &C,
    check_date: NaiveDate,
) -> Result<DailySummary, Error> {
    let checks = entity::prelude::CheckRecord::find()
        .filter(entity::check_record::Column::CheckDate.eq(check_date))
        .all(db)
        .await?;

    if checks.is_empty() {
        return Ok(DailySummary {
            date: check_date,
            stores: Vec::new(),
            total_checks: 0,
            total_present: 0,
        });
    }

    let mut counts: HashMap<i32, (usize, usize)> = HashMap::new();
    for check in &checks {
        let entry = counts.entry(check.store_id).or_default();
        entry.0 += 1;
        if check.is_present {
            entry.1 += 1;
        }
    }

    let stores: HashMap<i32, entity::store::Model> = entity::prelude::Store::find()
        .filter(entity::store::Column::Id.is_in(counts.keys().copied()))
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

    let mut lines: Vec<StoreDailySummary> = counts
        .into_iter()
        .filter_map(|(store_id, (total, present))| {
            let store = stores.get(&store_id)?;
            let network_name = networks
                .get(&store.network_id)
                .map(|network| network.name.clone())
                .unwrap_or_default();

            let completion_rate = if total > 0 {
                (present as f64 / total as f64 * 1000.0).round() / 10.0
            } else {
                0.0
            };

            Some(StoreDailySummary {
                id: store_id,
                number: store.number.clone(),
                address: store.address.clone(),
                network_name,
                total_checks: total,
                present_items: present,
                completion_rate,
            })
        })
        .collect();

    lines.sort_by(|a, b| a.number.cmp(&b.number));

    let total_checks = lines.iter().map(|line| line.total_checks).sum();
    let total_present = lines.iter().map(|line| line.present_items).sum();

    Ok(DailySummary {
        date: check_date,
        stores: lines,
        total_checks,
        total_present,
    })
}
