//! Report builders joining the check ledger with catalog metadata.
//!
//! Reports are built as typed row sets first and rendered second, so the
//! presentation layer can serve them as JSON or hand the CSV artifact to a
//! delivery channel. CSV output goes through the `csv` crate, which handles
//! quoting of delimiters, quotes, and newlines.

pub mod period;
pub mod store;

pub use period::{build_period_report, PeriodReport, PeriodReportRow};
pub use store::{build_store_report, StoreReport, StoreReportRow};

#[cfg(test)]
mod tests;

/// Render a flag the way the exports spell it.
pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Render an optional price; absent values export as empty fields.
pub(crate) fn price_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render an optional stock count; absent values export as empty fields.
pub(crate) fn stock_field(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
