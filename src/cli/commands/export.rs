//! Export command implementation
//!
//! This module implements the `export` command, writing the requested range
//! of values to a text file.

use super::plan::print_plan;
use super::RangeArgs;
use crate::adapters::oracle::JsonRpcEntropySource;
use crate::config::load_config_or_default;
use crate::core::export::{ExportPlan, Exporter};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Output file (defaults to the configured directory and file name template)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dry run mode - show the batch plan without reading the oracle
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let (range, layout) = match (self.range.to_range(), config.export.layout()) {
            (Ok(range), Ok(layout)) => (range, layout),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "Invalid export parameters");
                eprintln!("Invalid export parameters: {e}");
                return Ok(2);
            }
        };

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_path(&range));

        if self.dry_run {
            tracing::info!("Dry run mode enabled - oracle will not be read");
            println!("DRY RUN MODE - no oracle reads, no file written");
            println!();
            print_plan(&ExportPlan::new(&layout, range));
            println!("  Output file: {}", output_path.display());
            return Ok(0);
        }

        let source = match JsonRpcEntropySource::new(&config.oracle) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create entropy source");
                eprintln!("Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        let exporter = Exporter::new(Arc::new(source), layout);

        let summary = match exporter.run(range, &output_path).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(if e.is_connection_error() { 4 } else { 5 });
            }
        };

        println!("Output file: {}", summary.output_path.display());
        tracing::info!(
            values = summary.values_exported,
            batches = summary.batches_fetched,
            complete = summary.is_complete(),
            values_per_second = summary.values_per_second(),
            "Export summary"
        );

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(start_at: u64, how_many: u64, output: PathBuf, dry_run: bool) -> ExportArgs {
        ExportArgs {
            range: RangeArgs { start_at, how_many },
            output: Some(output),
            dry_run,
        }
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let config = dir.path().join("missing.toml");

        let code = args(1, 10, output.clone(), true)
            .execute(config.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(code, 0);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_invalid_config_exit_code() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bad.toml");
        std::fs::write(&config, "[export]\nbytes_per_word = 30\n").unwrap();

        let code = args(1, 10, dir.path().join("out.txt"), true)
            .execute(config.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(code, 2);
    }
}
