use chrono::{Duration, TimeZone, Utc};
use polars::prelude::*;
use proptest::prelude::*;

use noshow_clean::pipeline::clamp::clamp_age;
use noshow_clean::pipeline::dedupe::drop_duplicates;
use noshow_clean::pipeline::features::days_between;
use noshow_clean::pipeline::normalize::{normalize_header, title_case};
use noshow_clean::AgeGroup;

fn bucket_by_bins(age: i64) -> Option<AgeGroup> {
    AgeGroup::ALL
        .iter()
        .zip(AgeGroup::AGE_BINS.windows(2))
        .find(|(_, edges)| edges[0] <= age && (age < edges[1] || age == 110))
        .map(|(group, _)| *group)
}

fn frame(rows: &[Vec<String>]) -> DataFrame {
    let column = |idx: usize| rows.iter().map(|row| row[idx].as_str()).collect::<Vec<_>>();
    DataFrame::new(vec![Series::new("a", column(0)), Series::new("b", column(1))]).unwrap()
}

fn rows_of(df: &DataFrame) -> Vec<Vec<String>> {
    let a = df.column("a").unwrap().utf8().unwrap();
    let b = df.column("b").unwrap().utf8().unwrap();
    a.into_no_null_iter()
        .zip(b.into_no_null_iter())
        .map(|(a, b)| vec![a.to_string(), b.to_string()])
        .collect()
}

proptest! {
    #[test]
    fn clamped_age_is_in_range(age in any::<i64>()) {
        let clamped = clamp_age(age);
        prop_assert!((0..=110).contains(&clamped));
        prop_assert_eq!(clamp_age(clamped), clamped);
    }

    #[test]
    fn every_clamped_age_has_a_bucket(age in -500i64..500) {
        let group = AgeGroup::from_age(clamp_age(age));
        prop_assert!(group.is_some());
        prop_assert_eq!(group, bucket_by_bins(clamp_age(age)));
    }

    #[test]
    fn buckets_are_monotonic(a in 0i64..=110, b in 0i64..=110) {
        if a <= b {
            prop_assert!(AgeGroup::from_age(a) <= AgeGroup::from_age(b));
        }
    }

    #[test]
    fn days_between_is_never_negative(
        start in 1_400_000_000i64..1_600_000_000,
        offset in -100_000_000i64..100_000_000,
    ) {
        let scheduled = Utc.timestamp_opt(start, 0).unwrap();
        let appointment = scheduled + Duration::seconds(offset);
        let days = days_between(&scheduled, &appointment);
        prop_assert!(days >= 0);
        if appointment.date_naive() >= scheduled.date_naive() {
            prop_assert_eq!(days, (appointment.date_naive() - scheduled.date_naive()).num_days());
        }
    }

    #[test]
    fn dedupe_is_idempotent(rows in prop::collection::vec(prop::collection::vec(0u8..3, 2), 0..30)) {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.to_string()).collect())
            .collect();

        let once = drop_duplicates(frame(&rows)).unwrap();
        let twice = drop_duplicates(once.clone()).unwrap();
        let once = rows_of(&once);
        prop_assert_eq!(&once, &rows_of(&twice));

        for (i, row) in once.iter().enumerate() {
            prop_assert!(!once[i + 1..].contains(row));
            prop_assert!(rows.contains(row));
        }
        for row in &rows {
            prop_assert!(once.contains(row));
        }
    }

    #[test]
    fn title_case_is_idempotent(value in "[a-zA-Z -]{0,20}") {
        let once = title_case(&value);
        prop_assert_eq!(title_case(&once), once.clone());
        prop_assert_eq!(once.to_lowercase(), value.to_lowercase());
    }

    #[test]
    fn header_normalization_is_idempotent(name in "[A-Za-z_-]{1,20}") {
        let once = normalize_header(&name);
        prop_assert_eq!(normalize_header(&once), once.clone());
        prop_assert_eq!(once.to_lowercase(), once);
    }
}
