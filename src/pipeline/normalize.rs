use std::borrow::Cow;
use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use polars::prelude::*;

use crate::error::{CleanError, Result};

lazy_static! {
    /// Exact-match renames applied after lowercasing.
    static ref COLUMN_RENAMES: HashMap<&'static str, &'static str> = HashMap::from([
        ("patientid", "patient_id"),
        ("appointmentid", "appointment_id"),
        ("scheduledday", "scheduled_day"),
        ("appointmentday", "appointment_day"),
        ("hipertension", "hypertension"),
        ("handcap", "handicap"),
        ("no-show", "no_show"),
    ]);
}

/// Lowercases a header and applies the rename table.
pub fn normalize_header(name: &str) -> String {
    let lower = name.to_lowercase();
    match COLUMN_RENAMES.get(lower.as_str()) {
        Some(renamed) => (*renamed).to_string(),
        None => lower,
    }
}

/// Uppercases the first letter of every word and lowercases the rest. A word
/// starts after any non-alphabetic character.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn find_column(df: &DataFrame, normalized: &str) -> Result<String> {
    df.get_column_names()
        .into_iter()
        .find(|name| normalize_header(name) == normalized)
        .map(str::to_owned)
        .ok_or_else(|| CleanError::SchemaMismatch {
            column: normalized.to_string(),
            reason: "column not found".to_string(),
        })
}

/// Replaces every non-null value of a text column. Nulls stay null.
fn map_text(mut df: DataFrame, name: &str, f: impl Fn(&str) -> String) -> Result<DataFrame> {
    let mut mapped = df
        .column(name)?
        .utf8()?
        .apply(|value| Cow::Owned(f(value)))
        .into_series();
    mapped.rename(name);
    df.with_column(mapped)?;
    Ok(df)
}

/// Uppercases gender, title-cases no-show and normalizes every header.
pub fn normalize(df: DataFrame) -> Result<DataFrame> {
    let gender = find_column(&df, "gender")?;
    let no_show = find_column(&df, "no_show")?;

    let df = map_text(df, &gender, str::to_uppercase)?;
    let mut df = map_text(df, &no_show, title_case)?;
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(normalize_header)
        .collect();
    df.set_column_names(&headers)?;

    debug!("normalized headers: {:?}", headers);
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_follow_rename_table() {
        assert_eq!(normalize_header("PatientId"), "patient_id");
        assert_eq!(normalize_header("AppointmentID"), "appointment_id");
        assert_eq!(normalize_header("ScheduledDay"), "scheduled_day");
        assert_eq!(normalize_header("AppointmentDay"), "appointment_day");
        assert_eq!(normalize_header("Hipertension"), "hypertension");
        assert_eq!(normalize_header("Handcap"), "handicap");
        assert_eq!(normalize_header("No-show"), "no_show");
        assert_eq!(normalize_header("SMS_received"), "sms_received");
        assert_eq!(normalize_header("Neighbourhood"), "neighbourhood");
    }

    #[test]
    fn normalized_headers_are_stable() {
        for name in ["patient_id", "no_show", "hypertension", "age"] {
            assert_eq!(normalize_header(name), name);
        }
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("no"), "No");
        assert_eq!(title_case("YES"), "Yes");
        assert_eq!(title_case("not sure"), "Not Sure");
        assert_eq!(title_case("no-show"), "No-Show");
        assert_eq!(title_case(""), "");
    }

    fn text(df: &DataFrame, column: &str) -> Vec<Option<String>> {
        df.column(column)
            .unwrap()
            .utf8()
            .unwrap()
            .into_iter()
            .map(|value| value.map(str::to_owned))
            .collect()
    }

    #[test]
    fn normalizes_values_and_headers() {
        let df = DataFrame::new(vec![
            Series::new("Gender", vec![Some("f"), None]),
            Series::new("Age", vec!["3", "4"]),
            Series::new("No-show", vec!["no", "YES"]),
        ])
        .unwrap();

        let df = normalize(df).unwrap();
        assert_eq!(df.get_column_names(), vec!["gender", "age", "no_show"]);
        assert_eq!(text(&df, "gender"), vec![Some("F".to_string()), None]);
        assert_eq!(
            text(&df, "no_show"),
            vec![Some("No".to_string()), Some("Yes".to_string())]
        );
        assert_eq!(text(&df, "age")[0].as_deref(), Some("3"));
    }

    #[test]
    fn missing_gender_column() {
        let df = DataFrame::new(vec![Series::new("No-show", Vec::<&str>::new())]).unwrap();
        let err = normalize(df).unwrap_err();
        assert!(matches!(err, CleanError::SchemaMismatch { column, .. } if column == "gender"));
    }
}
