use chrono::{DateTime, Utc};

use crate::records::{AgeGroup, AppointmentRecord, DerivedAppointment};
use crate::timestamp::day_name;

/// Whole calendar days from scheduling to the appointment, never negative.
pub fn days_between(scheduled: &DateTime<Utc>, appointment: &DateTime<Utc>) -> i64 {
    let days = (appointment.date_naive() - scheduled.date_naive()).num_days();
    days.max(0)
}

pub fn derive(record: AppointmentRecord) -> DerivedAppointment {
    DerivedAppointment {
        days_between: days_between(&record.scheduled_day, &record.appointment_day),
        age_group: AgeGroup::from_age(record.age),
        appointment_dow: day_name(&record.appointment_day),
        scheduled_dow: day_name(&record.scheduled_day),
        record,
    }
}

pub fn derive_features(records: Vec<AppointmentRecord>) -> Vec<DerivedAppointment> {
    records.into_iter().map(derive).collect()
}
