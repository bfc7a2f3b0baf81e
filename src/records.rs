use chrono::{DateTime, Utc};
use polars::prelude::{DataType, Field, Schema, TimeUnit};
use serde::Serialize;

use crate::timestamp;

/// Columns an appointment row must carry once headers are normalized.
pub static RECORD_COLUMNS: [&str; 14] = [
    "patient_id",
    "appointment_id",
    "gender",
    "scheduled_day",
    "appointment_day",
    "age",
    "neighbourhood",
    "scholarship",
    "hypertension",
    "diabetes",
    "alcoholism",
    "handicap",
    "sms_received",
    "no_show",
];

/// Columns added by feature derivation, in output order.
pub static DERIVED_COLUMNS: [&str; 4] =
    ["days_between", "age_group", "appointment_dow", "scheduled_dow"];

/// One appointment after header normalization and type coercion. Text
/// fields are `None` where the source field was missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRecord {
    pub patient_id: f64,
    pub appointment_id: i64,
    pub gender: Option<String>,
    pub scheduled_day: DateTime<Utc>,
    pub appointment_day: DateTime<Utc>,
    pub age: i64,
    pub neighbourhood: Option<String>,
    pub scholarship: i64,
    pub hypertension: i64,
    pub diabetes: i64,
    pub alcoholism: i64,
    pub handicap: i64,
    pub sms_received: i64,
    pub no_show: Option<String>,
}

/// All-text schema for a raw file with the given header line. Every column
/// loads as `Utf8`; typing happens at coercion.
pub fn raw_schema<S: AsRef<str>>(headers: &[S]) -> Schema {
    Schema::from_iter(
        headers
            .iter()
            .map(|name| Field::new(name.as_ref(), DataType::Utf8)),
    )
}

/// Ordered age buckets. Variant order is bucket order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeGroup {
    Child,
    Teen,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    Adult,
    #[serde(rename = "Middle Aged")]
    MiddleAged,
    Senior,
}

impl AgeGroup {
    /// Bucket edges; bucket `i` covers `[AGE_BINS[i], AGE_BINS[i + 1])`.
    pub const AGE_BINS: [i64; 7] = [0, 12, 19, 30, 50, 65, 110];
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::YoungAdult,
        AgeGroup::Adult,
        AgeGroup::MiddleAged,
        AgeGroup::Senior,
    ];

    /// Buckets an age. The last bucket is closed on the right so the clamp
    /// ceiling of 110 still lands in `Senior`; anything outside `[0, 110]`
    /// has no bucket.
    pub fn from_age(age: i64) -> Option<AgeGroup> {
        let last = Self::AGE_BINS[Self::AGE_BINS.len() - 1];
        if age == last {
            return Some(AgeGroup::Senior);
        }
        Self::AGE_BINS
            .windows(2)
            .zip(Self::ALL)
            .find(|(edges, _)| edges[0] <= age && age < edges[1])
            .map(|(_, group)| group)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::YoungAdult => "Young Adult",
            AgeGroup::Adult => "Adult",
            AgeGroup::MiddleAged => "Middle Aged",
            AgeGroup::Senior => "Senior",
        }
    }
}

/// A coerced record plus its derived features.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedAppointment {
    pub record: AppointmentRecord,
    pub days_between: i64,
    pub age_group: Option<AgeGroup>,
    pub appointment_dow: String,
    pub scheduled_dow: String,
}

/// Final output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedAppointment {
    pub patient_id: f64,
    pub appointment_id: i64,
    pub gender: Option<String>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub scheduled_day: DateTime<Utc>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub appointment_day: DateTime<Utc>,
    pub age: i8,
    pub neighbourhood: Option<String>,
    pub scholarship: i8,
    pub hypertension: i8,
    pub diabetes: i8,
    pub alcoholism: i8,
    pub handicap: i8,
    pub sms_received: i8,
    pub no_show: Option<String>,
    pub days_between: i64,
    pub age_group: Option<AgeGroup>,
    pub appointment_dow: String,
    pub scheduled_dow: String,
}

impl CleanedAppointment {
    /// Output column names, in order.
    pub fn columns() -> Vec<&'static str> {
        RECORD_COLUMNS
            .iter()
            .chain(DERIVED_COLUMNS.iter())
            .copied()
            .collect()
    }

    /// Polars dtypes of the cleaned table, used for the preview frame and
    /// the Parquet output.
    pub fn cleaned_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("patient_id", DataType::Float64),
            Field::new("appointment_id", DataType::Int64),
            Field::new("gender", DataType::Utf8),
            Field::new(
                "scheduled_day",
                DataType::Datetime(TimeUnit::Milliseconds, None),
            ),
            Field::new(
                "appointment_day",
                DataType::Datetime(TimeUnit::Milliseconds, None),
            ),
            Field::new("age", DataType::Int8),
            Field::new("neighbourhood", DataType::Utf8),
            Field::new("scholarship", DataType::Int8),
            Field::new("hypertension", DataType::Int8),
            Field::new("diabetes", DataType::Int8),
            Field::new("alcoholism", DataType::Int8),
            Field::new("handicap", DataType::Int8),
            Field::new("sms_received", DataType::Int8),
            Field::new("no_show", DataType::Utf8),
            Field::new("days_between", DataType::Int64),
            Field::new("age_group", DataType::Utf8),
            Field::new("appointment_dow", DataType::Utf8),
            Field::new("scheduled_dow", DataType::Utf8),
        ])
    }
}
