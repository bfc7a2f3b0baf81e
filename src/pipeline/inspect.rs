use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullCount {
    pub column: String,
    pub nulls: usize,
}

/// Null count per column, in column order. Does not touch the frame.
pub fn null_counts(df: &DataFrame) -> Vec<NullCount> {
    df.get_columns()
        .iter()
        .map(|series| NullCount {
            column: series.name().to_string(),
            nulls: series.null_count(),
        })
        .collect()
}
