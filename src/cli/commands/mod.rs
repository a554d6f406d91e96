//! CLI command implementations

pub mod export;
pub mod init;
pub mod plan;
pub mod validate;

use crate::domain::ExportRange;
use clap::Args;

/// Range of values to export, shared by `export` and `plan`
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// 1-based index of the first value to export
    #[arg(long, env = "START_AT", value_parser = clap::value_parser!(u64).range(1..))]
    pub start_at: u64,

    /// Number of values to export
    #[arg(long, env = "HOW_MANY", value_parser = clap::value_parser!(u64).range(1..))]
    pub how_many: u64,
}

impl RangeArgs {
    pub fn to_range(&self) -> Result<ExportRange, String> {
        ExportRange::new(self.start_at, self.how_many)
    }
}
