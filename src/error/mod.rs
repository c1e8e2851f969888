//! Error types for the shelfwatch core.
//!
//! Missing data is never an error here: catalog lookups return empty
//! collections and report builders return `None` when there is nothing to
//! report. Only malformed input and storage or export failures surface as
//! `Err` values. Mapping these to user-visible messages is the presentation
//! layer's job.

pub mod report;
pub mod validation;

use thiserror::Error;

pub use report::ReportError;
pub use validation::ValidationError;

/// Main error type for the shelfwatch core.
///
/// Aggregates domain-specific error types and database errors into a single
/// unified error type, with `#[from]` conversions so callers can use the `?`
/// operator throughout.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input (blank product name, inverted period, bad date).
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Report rendering or file output failure.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
