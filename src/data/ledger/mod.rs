//! Check ledger repositories.
//!
//! The ledger holds the per-store, per-date inspection outcomes: one check
//! record per expected product, plus independent price captures keyed by the
//! same (store, product, date) triple. Checklist submissions replace the whole
//! set for a store and date; nothing is merged.

pub mod check;
pub mod price;

pub use check::record_checks;

#[cfg(test)]
mod tests;
