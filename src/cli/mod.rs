//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Export 64-bit values from on-chain VRF entropy
#[derive(Parser, Debug)]
#[command(name = "entropy-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "entropy-export.toml",
        env = "ENTROPY_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ENTROPY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export values to a text file
    Export(commands::export::ExportArgs),

    /// Show which batches an export would read, without network access
    Plan(commands::plan::PlanArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from([
            "entropy-export",
            "export",
            "--start-at",
            "441",
            "--how-many",
            "1000",
        ]);
        assert_eq!(cli.config, "entropy-export.toml");
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.range.start_at, 441);
                assert_eq!(args.range.how_many, 1000);
                assert!(!args.dry_run);
            }
            _ => panic!("Expected export command"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_start() {
        let result = Cli::try_parse_from([
            "entropy-export",
            "export",
            "--start-at",
            "0",
            "--how-many",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_count() {
        let result = Cli::try_parse_from([
            "entropy-export",
            "plan",
            "--start-at",
            "1",
            "--how-many",
            "many",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "entropy-export",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["entropy-export", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => assert!(args.force),
            _ => panic!("Expected init command"),
        }
    }
}
