//! Export summary and reporting

use crate::domain::{BatchIndex, ExportRange};
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a completed export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Requested range
    pub range: ExportRange,

    /// Values written to the output file
    pub values_exported: u64,

    /// Oracle reads performed
    pub batches_fetched: u64,

    /// First batch read
    pub first_batch: BatchIndex,

    /// Last batch read (None if nothing was read)
    pub last_batch: Option<BatchIndex>,

    /// Output file
    pub output_path: PathBuf,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create an empty summary for a run about to start
    pub fn new(range: ExportRange, first_batch: BatchIndex, output_path: PathBuf) -> Self {
        Self {
            range,
            values_exported: 0,
            batches_fetched: 0,
            first_batch,
            last_batch: None,
            output_path,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record one batch read and the values it contributed
    pub fn record_batch(&mut self, batch: BatchIndex, values: u64) {
        self.batches_fetched += 1;
        self.values_exported += values;
        self.last_batch = Some(batch);
    }

    /// All requested values were written
    pub fn is_complete(&self) -> bool {
        self.values_exported == self.range.how_many()
    }

    /// Export throughput in values per second
    pub fn values_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.values_exported as f64 / secs
    }
}
