use log::debug;
use polars::prelude::*;

use crate::error::Result;

/// Drops rows equal to an earlier row in every field. First occurrences are
/// kept and survivors stay in input order.
pub fn drop_duplicates(df: DataFrame) -> Result<DataFrame> {
    let before = df.height();
    let df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    debug!("dedupe dropped {} of {} rows", before - df.height(), before);
    Ok(df)
}
