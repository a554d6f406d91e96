//! Exporter - drives one export run
//!
//! Reads batches from the entropy source in increasing order, keeps only the
//! values inside the requested range and appends them to the output file.
//! Everything is sequential: one read, then one append, then the next batch.

use super::plan::ExportPlan;
use super::progress::{ConsoleProgress, ProgressSink, ProgressTracker};
use super::summary::ExportSummary;
use super::writer::OutputWriter;
use crate::adapters::oracle::EntropySource;
use crate::core::transform::{decode_batch, hex_to_decimal};
use crate::domain::{BatchIndex, BatchLayout, ExportRange, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// State owned by a single run
struct ExportRun {
    exported: u64,
    current_batch: BatchIndex,
    /// Leading values to drop; only non-zero until the first batch is written
    ignore_first: u64,
    progress: ProgressTracker,
}

impl ExportRun {
    fn new(plan: &ExportPlan) -> Self {
        Self {
            exported: 0,
            current_batch: plan.first_batch,
            ignore_first: plan.ignore_first,
            progress: ProgressTracker::new(plan.range.how_many()),
        }
    }
}

/// Export orchestrator
pub struct Exporter {
    source: Arc<dyn EntropySource>,
    layout: BatchLayout,
    progress: Arc<dyn ProgressSink>,
}

impl Exporter {
    /// Creates an exporter reporting progress to stdout
    pub fn new(source: Arc<dyn EntropySource>, layout: BatchLayout) -> Self {
        Self {
            source,
            layout,
            progress: Arc::new(ConsoleProgress),
        }
    }

    /// Replaces the progress sink
    pub fn with_progress_sink(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Plan for a range under this exporter's layout
    pub fn plan(&self, range: ExportRange) -> ExportPlan {
        ExportPlan::new(&self.layout, range)
    }

    /// Export `range` to `output_path`
    ///
    /// Any error aborts the run; values already appended stay in the file.
    pub async fn run(&self, range: ExportRange, output_path: &Path) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let plan = self.plan(range);

        tracing::info!(
            start_at = range.start_at(),
            how_many = range.how_many(),
            first_batch = plan.first_batch.value(),
            last_batch = plan.last_batch.value(),
            ignore_first = plan.ignore_first,
            source = %self.source.describe(),
            "Starting export"
        );

        let mut writer = OutputWriter::create(output_path).await?;
        let mut summary = ExportSummary::new(range, plan.first_batch, output_path.to_path_buf());
        let mut run = ExportRun::new(&plan);

        while run.exported < range.how_many() {
            let batch = run.current_batch;
            let raw = self.source.collected_entropy(batch).await?;
            let chunks = decode_batch(&raw, &self.layout, batch)?;

            let remaining = usize::try_from(range.how_many() - run.exported).unwrap_or(usize::MAX);
            let values = chunks
                .into_iter()
                .skip(run.ignore_first as usize)
                .take(remaining)
                .map(hex_to_decimal)
                .collect::<Result<Vec<String>>>()?;
            run.ignore_first = 0;

            writer.append(&values).await?;
            run.exported += values.len() as u64;
            summary.record_batch(batch, values.len() as u64);

            tracing::debug!(
                batch = batch.value(),
                values = values.len(),
                exported = run.exported,
                "Batch exported"
            );

            if let Some(percent) = run.progress.update(run.exported) {
                tracing::debug!(percent, exported = run.exported, "Progress");
                self.progress
                    .report(percent, run.exported, range.how_many());
            }

            run.current_batch = batch.next();
        }

        writer.finish().await?;

        let summary = summary.with_duration(start_time.elapsed());
        tracing::info!(
            values = summary.values_exported,
            batches = summary.batches_fetched,
            duration_ms = summary.duration.as_millis() as u64,
            output = %summary.output_path.display(),
            "Export completed"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::progress::progress_line;
    use crate::domain::ExportError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Batch `b` holds values `(b-1)*n .. b*n - 1` for a layout of `n` values
    struct CountingSource {
        layout: BatchLayout,
        reads: Mutex<Vec<u64>>,
    }

    impl CountingSource {
        fn new(layout: BatchLayout) -> Self {
            Self {
                layout,
                reads: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EntropySource for CountingSource {
        async fn collected_entropy(&self, batch: BatchIndex) -> Result<String> {
            self.reads.lock().unwrap().push(batch.value());
            let n = self.layout.values_per_batch();
            let first = (batch.value() - 1) * n;
            let payload: String = (first..first + n).map(|v| format!("{v:016x}")).collect();
            Ok(format!("0x{payload}"))
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        lines: Mutex<Vec<String>>,
    }

    impl ProgressSink for RecordingProgress {
        fn report(&self, percent: u64, exported: u64, total: u64) {
            self.lines
                .lock()
                .unwrap()
                .push(progress_line(percent, exported, total));
        }
    }

    struct UnfulfilledSource;

    #[async_trait]
    impl EntropySource for UnfulfilledSource {
        async fn collected_entropy(&self, _batch: BatchIndex) -> Result<String> {
            Ok("0x".to_string())
        }

        fn describe(&self) -> String {
            "unfulfilled".to_string()
        }
    }

    fn small_layout() -> BatchLayout {
        BatchLayout::new(8, 16, 2).unwrap() // 4 values per batch
    }

    #[tokio::test]
    async fn test_run_skips_leading_values_only_in_first_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let source = Arc::new(CountingSource::new(small_layout()));
        let exporter = Exporter::new(source.clone(), small_layout());

        let summary = exporter
            .run(ExportRange::new(3, 7).unwrap(), &path)
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "2\n3\n4\n5\n6\n7\n8");
        assert_eq!(*source.reads.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(summary.values_exported, 7);
        assert_eq!(summary.batches_fetched, 3);
        assert_eq!(summary.last_batch, Some(BatchIndex::new(3)));
    }

    #[tokio::test]
    async fn test_run_single_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let exporter = Exporter::new(Arc::new(CountingSource::new(small_layout())), small_layout());

        exporter
            .run(ExportRange::new(4, 1).unwrap(), &path)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "3");
    }

    #[tokio::test]
    async fn test_run_reports_progress_once_per_batch_percent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let progress = Arc::new(RecordingProgress::default());
        let exporter = Exporter::new(Arc::new(CountingSource::new(small_layout())), small_layout())
            .with_progress_sink(progress.clone());

        // 3 values from batch 1, then 4, 4 and 1
        exporter
            .run(ExportRange::new(2, 12).unwrap(), &path)
            .await
            .unwrap();

        assert_eq!(
            *progress.lines.lock().unwrap(),
            vec![
                "25% (3/12 values)",
                "58% (7/12 values)",
                "91% (11/12 values)",
                "100% (12/12 values)",
            ]
        );
    }

    #[tokio::test]
    async fn test_run_fails_on_unfulfilled_batch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let exporter = Exporter::new(Arc::new(UnfulfilledSource), small_layout());

        let err = exporter
            .run(ExportRange::new(5, 2).unwrap(), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::EntropyNotAvailable { batch: 2 }));
    }
}
