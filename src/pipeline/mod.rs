//! The cleaning stages, in run order.
//!
//! Text stages take and return an all-`Utf8` polars [`DataFrame`]; from
//! coercion on the table is a `Vec` of typed records.

pub mod clamp;
pub mod coerce;
pub mod dedupe;
pub mod features;
pub mod finalize;
pub mod inspect;
pub mod normalize;

use log::{info, warn};
use polars::prelude::DataFrame;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::frame;
use crate::io::{read_csv, write_csv, write_parquet, write_report};
use crate::records::CleanedAppointment;
use crate::summary::{ColumnType, RunSummary};

#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub records: Vec<CleanedAppointment>,
    pub summary: RunSummary,
}

/// Runs every stage on a loaded frame. Null counts are logged before any
/// stage can fail.
pub fn clean_table(df: DataFrame) -> Result<CleanOutcome> {
    let null_counts = inspect::null_counts(&df);
    for count in &null_counts {
        info!("missing values in {}: {}", count.column, count.nulls);
    }

    let input_rows = df.height();
    let df = dedupe::drop_duplicates(df)?;
    let rows_after_dedup = df.height();
    info!(
        "initial rows: {}, rows after removing duplicates: {}",
        input_rows, rows_after_dedup
    );

    let df = normalize::normalize(df)?;
    let records = coerce::coerce(&df)?;
    let records = clamp::clamp_ages(records);
    let derived = features::derive_features(records);
    let records = finalize::finalize(derived)?;

    let non_binary_flags = finalize::non_binary_flags(&records);
    if non_binary_flags > 0 {
        warn!("{} flag values are not 0/1; kept as-is", non_binary_flags);
    }

    let dtypes = frame::dtypes(&frame::records_to_frame(&[])?)
        .into_iter()
        .map(|(column, dtype)| ColumnType { column, dtype })
        .collect();

    Ok(CleanOutcome {
        records,
        summary: RunSummary {
            input_rows,
            rows_after_dedup,
            duplicates_removed: input_rows - rows_after_dedup,
            null_counts,
            non_binary_flags,
            dtypes,
        },
    })
}

/// Loads, cleans and writes. Nothing is written unless every stage succeeds.
pub fn run(config: &PipelineConfig) -> Result<CleanOutcome> {
    let df = read_csv(&config.input)?;
    let outcome = clean_table(df)?;

    write_csv(&config.output, &outcome.records)?;
    if let Some(path) = &config.parquet {
        write_parquet(path, &outcome.records)?;
    }
    if let Some(path) = &config.report {
        write_report(path, &outcome.summary)?;
    }
    Ok(outcome)
}
