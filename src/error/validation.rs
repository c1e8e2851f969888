use chrono::NaiveDate;
use thiserror::Error;

/// Malformed caller input, surfaced instead of being silently defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A product name in a checklist submission was empty or whitespace.
    #[error("product name must not be blank")]
    BlankProductName,
    /// A period report was requested with start after end.
    #[error("period start {start} is after period end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid check date: {0:?}")]
    InvalidDate(String),
}
