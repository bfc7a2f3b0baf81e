use log::debug;

use crate::records::AppointmentRecord;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 110;

pub fn clamp_age(age: i64) -> i64 {
    num::clamp(age, MIN_AGE, MAX_AGE)
}

/// Clamps every age into `[MIN_AGE, MAX_AGE]`.
pub fn clamp_ages(records: Vec<AppointmentRecord>) -> Vec<AppointmentRecord> {
    let mut clamped = 0usize;
    let records = records
        .into_iter()
        .map(|mut record| {
            let age = clamp_age(record.age);
            if age != record.age {
                clamped += 1;
                record.age = age;
            }
            record
        })
        .collect();
    debug!("clamped {} out-of-range ages", clamped);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(clamp_age(-5), 0);
        assert_eq!(clamp_age(-1), 0);
        assert_eq!(clamp_age(0), 0);
        assert_eq!(clamp_age(57), 57);
        assert_eq!(clamp_age(110), 110);
        assert_eq!(clamp_age(130), 110);
    }
}
