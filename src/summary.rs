use serde::Serialize;
use sysinfo::{get_current_pid, ProcessExt, System, SystemExt};

use crate::pipeline::inspect::NullCount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnType {
    pub column: String,
    pub dtype: String,
}

/// Diagnostics collected while cleaning. Written as the JSON run report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub input_rows: usize,
    pub rows_after_dedup: usize,
    pub duplicates_removed: usize,
    pub null_counts: Vec<NullCount>,
    pub non_binary_flags: usize,
    pub dtypes: Vec<ColumnType>,
}

/// Resident memory of this process in bytes, 0 if it cannot be read.
pub fn monitor_memory() -> u64 {
    let pid = match get_current_pid() {
        Ok(pid) => pid,
        Err(_) => return 0,
    };
    let mut system = System::new();
    system.refresh_process(pid);
    system.process(pid).map_or(0, |process| process.memory())
}
