use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

use noshow_clean::config::{INPUT_PATH, OUTPUT_PATH, SAMPLE_ROWS};
use noshow_clean::frame::{dtypes, preview};
use noshow_clean::summary::monitor_memory;
use noshow_clean::{run, PipelineConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Clean the medical appointment no-show dataset", long_about = None)]
struct Args {
    #[arg(short, long, default_value = INPUT_PATH, help = "Input CSV path")]
    input: PathBuf,
    #[arg(short, long, default_value = OUTPUT_PATH, help = "Cleaned CSV path")]
    output: PathBuf,
    #[arg(long, help = "Also write the cleaned table as Parquet")]
    parquet: Option<PathBuf>,
    #[arg(long, help = "Write a JSON run report")]
    report: Option<PathBuf>,
    #[arg(long, default_value_t = SAMPLE_ROWS, help = "Rows shown in the preview")]
    sample: usize,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Verbose level")]
    verbose: u8,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            parquet: args.parquet,
            report: args.report,
            sample_rows: args.sample,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = Env::new().filter("NOSHOW_LOG");
    Builder::new()
        .filter(Some("noshow_clean"), log_level)
        .parse_env(env)
        .init();

    debug!("Arguments {:#?}", args);

    let start_time = Instant::now();
    let start_memory = monitor_memory();

    let config = PipelineConfig::from(args);
    let outcome = run(&config)?;
    let summary = &outcome.summary;

    println!("Missing values before cleaning:");
    for count in &summary.null_counts {
        println!("{:<16}{}", count.column, count.nulls);
    }

    println!("\nInitial rows: {}", summary.input_rows);
    println!("Rows after removing duplicates: {}", summary.rows_after_dedup);

    let sample = preview(&outcome.records, config.sample_rows)?;
    println!("\nData types after cleaning:");
    for (column, dtype) in dtypes(&sample) {
        println!("{:<16}{}", column, dtype);
    }

    println!("\nSample of cleaned data:");
    println!("{}", sample);

    let end_memory = monitor_memory();
    let duration = start_time.elapsed();

    println!("Time elapsed: {:?}", duration);
    println!("Memory used: {} bytes", end_memory.saturating_sub(start_memory));

    Ok(())
}
