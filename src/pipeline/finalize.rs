use crate::error::{CleanError, Result};
use crate::records::{CleanedAppointment, DerivedAppointment};

fn narrow(row: usize, column: &str, value: i64) -> Result<i8> {
    i8::try_from(value).map_err(|_| CleanError::RangeOverflow {
        row,
        column: column.to_string(),
        value,
    })
}

/// Narrows age and the flag columns to `i8`. Flags are trusted to be small
/// indicators rather than strictly 0/1; see [`non_binary_flags`].
pub fn finalize(records: Vec<DerivedAppointment>) -> Result<Vec<CleanedAppointment>> {
    let mut cleaned = Vec::with_capacity(records.len());

    for (idx, derived) in records.into_iter().enumerate() {
        let row = idx + 1;
        let record = derived.record;

        cleaned.push(CleanedAppointment {
            age: narrow(row, "age", record.age)?,
            scholarship: narrow(row, "scholarship", record.scholarship)?,
            hypertension: narrow(row, "hypertension", record.hypertension)?,
            diabetes: narrow(row, "diabetes", record.diabetes)?,
            alcoholism: narrow(row, "alcoholism", record.alcoholism)?,
            handicap: narrow(row, "handicap", record.handicap)?,
            sms_received: narrow(row, "sms_received", record.sms_received)?,
            patient_id: record.patient_id,
            appointment_id: record.appointment_id,
            gender: record.gender,
            scheduled_day: record.scheduled_day,
            appointment_day: record.appointment_day,
            neighbourhood: record.neighbourhood,
            no_show: record.no_show,
            days_between: derived.days_between,
            age_group: derived.age_group,
            appointment_dow: derived.appointment_dow,
            scheduled_dow: derived.scheduled_dow,
        });
    }

    Ok(cleaned)
}

/// Number of flag values outside 0/1 across all rows.
pub fn non_binary_flags(records: &[CleanedAppointment]) -> usize {
    records
        .iter()
        .flat_map(|r| {
            [
                r.scholarship,
                r.hypertension,
                r.diabetes,
                r.alcoholism,
                r.handicap,
                r.sms_received,
            ]
        })
        .filter(|value| *value != 0 && *value != 1)
        .count()
}
