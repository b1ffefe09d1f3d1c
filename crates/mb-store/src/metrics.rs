use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use mb_matrix::Approach;

use crate::error::Result;

/// CSV column header, written once per metrics file.
pub const METRICS_HEADER: &str = "matrix_size,num_threads,approach,execution_time";

/// One timed multiplication run. Produced once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetric {
    pub matrix_size: usize,
    pub num_threads: usize,
    pub approach: Approach,
    pub execution_time_ms: f64,
}

impl PerformanceMetric {
    /// CSV row: `int,int,string,float` with the time at 6 decimal places.
    fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6}",
            self.matrix_size, self.num_threads, self.approach, self.execution_time_ms
        )
    }
}

/// Append `metrics` to the CSV file at `path`, writing the header first
/// if the file does not exist yet.
pub fn append_metrics(path: &Path, metrics: &[PerformanceMetric]) -> Result<()> {
    let write_header = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    if write_header {
        writeln!(writer, "{}", METRICS_HEADER)?;
    }
    for metric in metrics {
        writeln!(writer, "{}", metric.to_csv_row())?;
    }
    writer.flush()?;
    Ok(())
}
