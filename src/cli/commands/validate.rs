//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file.

use crate::config::load_config_or_default;
use clap::Args;
use secrecy::ExposeSecret;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        if Path::new(config_path).exists() {
            println!("Validating configuration file: {config_path}");
        } else {
            println!("No configuration file at {config_path}; validating defaults and environment");
        }
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let layout = match config.export.layout() {
            Ok(layout) => layout,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        match &config.oracle.rpc_url {
            Some(url) => println!("  RPC Node: {}", url.expose_secret().redacted_url()),
            None => println!("  RPC Node: (not set - required for export)"),
        }
        println!("  Contract: {}", config.oracle.contract_address);
        println!("  Function: {}", config.oracle.function_signature);
        println!("  Block Tag: {}", config.oracle.block_tag);
        println!("  Output Directory: {}", config.export.output_dir);
        println!("  File Name Template: {}", config.export.file_name_template);
        println!("  Values per Batch: {}", layout.values_per_batch());
        println!();

        if config.oracle.rpc_url.is_none() {
            tracing::warn!("oracle.rpc_url is not set; export will fail until it is provided");
        }

        Ok(0)
    }
}
