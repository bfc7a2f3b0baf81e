use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{info, warn};
use polars::prelude::*;

use crate::error::{CleanError, Result};
use crate::records::{AppointmentRecord, RECORD_COLUMNS};
use crate::timestamp;

/// Checks the normalized headers against the record schema. Extra columns
/// are allowed and ignored.
fn check_schema(headers: &[&str]) -> Result<()> {
    for column in RECORD_COLUMNS {
        if !headers.contains(&column) {
            return Err(CleanError::SchemaMismatch {
                column: column.to_string(),
                reason: "column not found".to_string(),
            });
        }
    }
    let extra: Vec<&&str> = headers
        .iter()
        .filter(|name| !RECORD_COLUMNS.contains(*name))
        .collect();
    if !extra.is_empty() {
        warn!("ignoring columns outside the record schema: {:?}", extra);
    }
    Ok(())
}

fn text_column<'a>(df: &'a DataFrame, column: &str) -> Result<Vec<Option<&'a str>>> {
    Ok(df.column(column)?.utf8()?.into_iter().collect())
}

fn missing(row: usize, column: &str) -> CleanError {
    CleanError::Parse {
        row,
        column: column.to_string(),
        value: String::new(),
        reason: "missing value".to_string(),
    }
}

fn parse_number<T>(row: usize, column: &str, value: Option<&str>) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let value = value.ok_or_else(|| missing(row, column))?;
    value.trim().parse().map_err(|err: T::Err| CleanError::Parse {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    })
}

fn parse_timestamp(row: usize, column: &str, value: Option<&str>) -> Result<DateTime<Utc>> {
    let value = value.ok_or_else(|| missing(row, column))?;
    timestamp::parse(value).ok_or_else(|| CleanError::Parse {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: "unrecognised timestamp".to_string(),
    })
}

/// Turns the normalized text frame into typed records. Both date columns are
/// parsed as timestamps; a value that does not parse aborts the run. Null
/// text fields stay `None`.
pub fn coerce(df: &DataFrame) -> Result<Vec<AppointmentRecord>> {
    check_schema(&df.get_column_names())?;

    let patient_id = text_column(df, "patient_id")?;
    let appointment_id = text_column(df, "appointment_id")?;
    let gender = text_column(df, "gender")?;
    let scheduled_day = text_column(df, "scheduled_day")?;
    let appointment_day = text_column(df, "appointment_day")?;
    let age = text_column(df, "age")?;
    let neighbourhood = text_column(df, "neighbourhood")?;
    let scholarship = text_column(df, "scholarship")?;
    let hypertension = text_column(df, "hypertension")?;
    let diabetes = text_column(df, "diabetes")?;
    let alcoholism = text_column(df, "alcoholism")?;
    let handicap = text_column(df, "handicap")?;
    let sms_received = text_column(df, "sms_received")?;
    let no_show = text_column(df, "no_show")?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        records.push(AppointmentRecord {
            patient_id: parse_number(row, "patient_id", patient_id[idx])?,
            appointment_id: parse_number(row, "appointment_id", appointment_id[idx])?,
            gender: gender[idx].map(str::to_owned),
            scheduled_day: parse_timestamp(row, "scheduled_day", scheduled_day[idx])?,
            appointment_day: parse_timestamp(row, "appointment_day", appointment_day[idx])?,
            age: parse_number(row, "age", age[idx])?,
            neighbourhood: neighbourhood[idx].map(str::to_owned),
            scholarship: parse_number(row, "scholarship", scholarship[idx])?,
            hypertension: parse_number(row, "hypertension", hypertension[idx])?,
            diabetes: parse_number(row, "diabetes", diabetes[idx])?,
            alcoholism: parse_number(row, "alcoholism", alcoholism[idx])?,
            handicap: parse_number(row, "handicap", handicap[idx])?,
            sms_received: parse_number(row, "sms_received", sms_received[idx])?,
            no_show: no_show[idx].map(str::to_owned),
        });
    }

    info!("coerced {} rows into appointment records", records.len());
    Ok(records)
}
