use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use polars::prelude::{CsvReader, DataFrame, NullValues, SerReader};
use polars_io::parquet::ParquetWriter;

use crate::error::{CleanError, Result};
use crate::frame::records_to_frame;
use crate::records::{raw_schema, CleanedAppointment};
use crate::summary::RunSummary;

/// Field values read as null, matching the usual CSV null markers.
pub static NULL_VALUES: [&str; 9] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn create<P: AsRef<Path>>(path: P) -> Result<File> {
    File::create(path.as_ref()).map_err(|source| CleanError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Loads a CSV with a header row. Headers are kept verbatim, every column is
/// text and [`NULL_VALUES`] fields load as nulls.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CleanError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let headers: Vec<String> = csv::Reader::from_reader(open(path)?)
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect();
    let null_values = NULL_VALUES.iter().map(|value| value.to_string()).collect();

    let df = CsvReader::new(open(path)?)
        .has_header(true)
        .with_dtypes(Option::from(Arc::new(raw_schema(&headers))))
        .with_null_values(Some(NullValues::AllColumns(null_values)))
        .finish()?;

    info!("loaded {} rows x {} columns from {:?}", df.height(), df.width(), path);
    Ok(df)
}

/// Writes the cleaned table as CSV, replacing any existing file.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[CleanedAppointment]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_writer(create(path)?);
    if records.is_empty() {
        writer.write_record(CleanedAppointment::columns())?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {} rows to {:?}", records.len(), path);
    Ok(())
}

pub fn write_parquet<P: AsRef<Path>>(path: P, records: &[CleanedAppointment]) -> Result<()> {
    let path = path.as_ref();
    let mut df = records_to_frame(records)?;
    let mut file = create(path)?;

    ParquetWriter::new(&mut file).finish(&mut df)?;

    info!("wrote parquet copy to {:?}", path);
    Ok(())
}

pub fn write_report<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, summary)?;
    file.write_all(b"\n").map_err(|source| CleanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote run report to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use std::fs;

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CleanError::MissingFile { .. }));
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
    fn headers_are_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "PatientId,No-show,SMS_received\n1,No,0\n2,Yes,1\n").unwrap();

        let df = read_csv(&path).unwrap();
        assert_eq!(df.get_column_names(), vec!["PatientId", "No-show", "SMS_received"]);
        assert!(df.dtypes().iter().all(|dtype| dtype == &DataType::Utf8));
        assert_eq!(
            text(&df, "SMS_received"),
            vec![Some("0".to_string()), Some("1".to_string())]
        );
    }

    #[test]
    fn markers_load_as_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "Age,Neighbourhood\n3,\nN/A,CENTRO\n7,NA\n").unwrap();

        let df = read_csv(&path).unwrap();
        assert_eq!(df.column("Age").unwrap().null_count(), 1);
        assert_eq!(
            text(&df, "Neighbourhood"),
            vec![None, Some("CENTRO".to_string()), None]
        );
    }

    #[test]
    fn empty_table_still_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.trim_end(),
            CleanedAppointment::columns().join(",")
        );
    }
}
