//! Timestamp parsing and formatting for the two date columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serializer;

/// Format the writer emits; accepted back by [`parse`].
pub static OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

static OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];
static NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
static DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-like timestamp into UTC.
///
/// Values carrying an offset are converted to UTC, naive values are taken as
/// UTC and a bare date means midnight.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(OUTPUT_FORMAT).to_string()
}

/// Full English day name, e.g. `Monday`.
pub fn day_name(ts: &DateTime<Utc>) -> String {
    ts.format("%A").to_string()
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}
