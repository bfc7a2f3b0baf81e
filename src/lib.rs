//! Cleaning pipeline for the medical appointment no-show dataset.
//!
//! Loads the raw CSV, inspects nulls, drops duplicate rows, normalizes text
//! and headers, coerces timestamps, clamps ages, derives day-gap, age-bucket
//! and weekday features, narrows flags to `i8` and writes a cleaned CSV.

pub mod config;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod records;
pub mod summary;
pub mod timestamp;

pub use config::PipelineConfig;
pub use error::{CleanError, Result};
pub use pipeline::{clean_table, run, CleanOutcome};
pub use records::{raw_schema, AgeGroup, AppointmentRecord, CleanedAppointment};
