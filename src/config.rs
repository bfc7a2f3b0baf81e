use std::path::PathBuf;

pub static INPUT_PATH: &str = "noshowappointments.csv";
pub static OUTPUT_PATH: &str = "cleaned_noshowappointments.csv";
pub static SAMPLE_ROWS: usize = 5;

/// Where a run reads from and writes to.
///
/// `Default` reproduces the fixed paths of the one-shot cleaning script; the
/// binary overrides them from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional Parquet copy of the cleaned table.
    pub parquet: Option<PathBuf>,
    /// Optional JSON run report.
    pub report: Option<PathBuf>,
    /// Number of rows shown in the console preview.
    pub sample_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            parquet: None,
            report: None,
            sample_rows: SAMPLE_ROWS,
        }
    }
}
