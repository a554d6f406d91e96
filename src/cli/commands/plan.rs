//! Plan command implementation

use super::RangeArgs;
use crate::config::load_config_or_default;
use crate::core::export::ExportPlan;
use clap::Args;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let (range, layout) = match (self.range.to_range(), config.export.layout()) {
            (Ok(range), Ok(layout)) => (range, layout),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Invalid export parameters: {e}");
                return Ok(2);
            }
        };

        let plan = ExportPlan::new(&layout, range);
        print_plan(&plan);
        println!("  Output file: {}", config.export.output_path(&range).display());
        println!();
        Ok(0)
    }
}

/// Prints the batch plan; shared with `export --dry-run`
pub fn print_plan(plan: &ExportPlan) {
    println!("Export Plan:");
    println!(
        "  Values: {}..={} ({} values)",
        plan.range.start_at(),
        plan.range.end_at(),
        plan.range.how_many()
    );
    println!("  Values per batch: {}", plan.values_per_batch);
    println!(
        "  Batches: {}..={} ({} reads)",
        plan.first_batch,
        plan.last_batch,
        plan.batch_count()
    );
    println!("  Skipped in first batch: {}", plan.ignore_first);
    println!("  Taken from last batch: {}", plan.taken_from_last);
}
