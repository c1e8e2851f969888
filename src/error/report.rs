use thiserror::Error;

/// Failure while rendering or writing a report artifact.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Filesystem failure while writing an export.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
