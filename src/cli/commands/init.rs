//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "entropy-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set ENTROPY_ORACLE_RPC_URL in your environment or a .env file");
                println!("  2. Validate configuration: entropy-export validate-config");
                println!(
                    "  3. Run export: START_AT=1 HOW_MANY=1000 entropy-export export"
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

/// Sample configuration with every setting at its default
pub fn sample_config() -> &'static str {
    r#"# entropy-export configuration

[application]
log_level = "info"  # trace | debug | info | warn | error

[oracle]
# JSON-RPC endpoint, required by `export` only. Provider URLs usually embed
# an API key, so prefer ENTROPY_ORACLE_RPC_URL in the environment or .env
# rpc_url = "https://eth-mainnet.example.io/v2/<api-key>"
contract_address = "0xBBCD0c8DBdC112dd29af8c57Ee8740bD9feE084B"
function_signature = "collectedEntropy(uint256)"
block_tag = "latest"
timeout_seconds = 60
tls_verify = true

[export]
output_dir = "./script-outputs"
# {start_at} and {how_many} are replaced with the requested range
file_name_template = "OnlyRaw-{start_at}-{how_many}.txt"

# 8 bytes per value, 32-byte words, 110 words per VRF request: 440 values per batch
entropy_bytes_per_value = 8
bytes_per_word = 32
words_per_request = 110

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
}
