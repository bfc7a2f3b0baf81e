use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Everything that can abort a cleaning run.
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("input file not found: {path:?}")]
    MissingFile { path: PathBuf },
    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row}, column '{column}': cannot parse {value:?} ({reason})")]
    Parse {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },
    #[error("column '{column}': {reason}")]
    SchemaMismatch { column: String, reason: String },
    #[error("row {row}, column '{column}': value {value} does not fit in an i8")]
    RangeOverflow {
        row: usize,
        column: String,
        value: i64,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error("failed to write run report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_row_and_column() {
        let err = CleanError::Parse {
            row: 3,
            column: "scheduled_day".to_string(),
            value: "yesterday".to_string(),
            reason: "unrecognised timestamp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 3, column 'scheduled_day': cannot parse \"yesterday\" (unrecognised timestamp)"
        );
    }

    #[test]
    fn range_overflow_display() {
        let err = CleanError::RangeOverflow {
            row: 1,
            column: "handicap".to_string(),
            value: 300,
        };
        assert_eq!(
            err.to_string(),
            "row 1, column 'handicap': value 300 does not fit in an i8"
        );
    }
}
