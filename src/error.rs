use thiserror::Error;

use crate::config::{MAX_YEAR, MIN_YEAR};

/// Why a single plot request produced no charts.
///
/// The `Display` text is shown verbatim in the error dialog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Non-integer entry, bound outside the accepted years, or start >= end.
    #[error(
        "Invalid input. Please enter a valid year range from {min} to {max}, with start year less than end year.",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    InvalidInput,

    #[error("No data available for the year range {start} to {end}.")]
    NoData { start: i64, end: i64 },

    #[error("Regression failed: {0}")]
    Regression(String),
}
