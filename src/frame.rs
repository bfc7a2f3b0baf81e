use polars::prelude::*;

use crate::records::CleanedAppointment;

fn values<'a, T>(
    records: &'a [CleanedAppointment],
    f: impl Fn(&'a CleanedAppointment) -> T,
) -> Vec<T> {
    records.iter().map(f).collect()
}

/// Builds a polars frame from cleaned records, typed per
/// [`CleanedAppointment::cleaned_schema`].
pub fn records_to_frame(records: &[CleanedAppointment]) -> PolarsResult<DataFrame> {
    let schema = CleanedAppointment::cleaned_schema();
    let series = vec![
        Series::new("patient_id", values(records, |r| r.patient_id)),
        Series::new("appointment_id", values(records, |r| r.appointment_id)),
        Series::new("gender", values(records, |r| r.gender.as_deref())),
        // datetimes go in as epoch millis and are cast below
        Series::new("scheduled_day", values(records, |r| r.scheduled_day.timestamp_millis())),
        Series::new("appointment_day", values(records, |r| r.appointment_day.timestamp_millis())),
        Series::new("age", values(records, |r| r.age)),
        Series::new("neighbourhood", values(records, |r| r.neighbourhood.as_deref())),
        Series::new("scholarship", values(records, |r| r.scholarship)),
        Series::new("hypertension", values(records, |r| r.hypertension)),
        Series::new("diabetes", values(records, |r| r.diabetes)),
        Series::new("alcoholism", values(records, |r| r.alcoholism)),
        Series::new("handicap", values(records, |r| r.handicap)),
        Series::new("sms_received", values(records, |r| r.sms_received)),
        Series::new("no_show", values(records, |r| r.no_show.as_deref())),
        Series::new("days_between", values(records, |r| r.days_between)),
        Series::new(
            "age_group",
            values(records, |r| r.age_group.map(|group| group.label())),
        ),
        Series::new("appointment_dow", values(records, |r| r.appointment_dow.as_str())),
        Series::new("scheduled_dow", values(records, |r| r.scheduled_dow.as_str())),
    ];

    let series = series
        .into_iter()
        .map(|s| match schema.get(s.name()) {
            Some(dtype) => s.cast(dtype),
            None => Ok(s),
        })
        .collect::<PolarsResult<Vec<Series>>>()?;
    DataFrame::new(series)
}

/// The first `n` cleaned records as a frame, for console display.
pub fn preview(records: &[CleanedAppointment], n: usize) -> PolarsResult<DataFrame> {
    records_to_frame(&records[..n.min(records.len())])
}

/// Column name and dtype pairs, in column order.
pub fn dtypes(df: &DataFrame) -> Vec<(String, String)> {
    df.get_column_names()
        .into_iter()
        .zip(df.dtypes())
        .map(|(name, dtype)| (name.to_string(), dtype.to_string()))
        .collect()
}
