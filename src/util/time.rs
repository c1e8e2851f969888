//! Date parsing and formatting utilities.

use chrono::{NaiveDate, Utc};

use crate::error::ValidationError;

/// Parse a check date from its wire form.
///
/// The presentation layer passes dates as `YYYY-MM-DD` strings; anything else
/// is rejected rather than defaulted.
///
/// # Arguments
/// - `input` - The date string to parse
///
/// # Returns
/// - `Ok(NaiveDate)` - The parsed date
/// - `Err(ValidationError::InvalidDate)` - The string was not a valid `YYYY-MM-DD` date
pub fn parse_check_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Timestamp suffix for report file names, second resolution.
pub fn report_timestamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S").to_string()
}
