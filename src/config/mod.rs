//! Configuration management.
//!
//! # Overview
//!
//! Configuration comes from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ENTROPY_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`OracleConfig`] - JSON-RPC node, contract address and view function
//! - [`ExportConfig`] - Output location and batch layout
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [oracle]
//! rpc_url = "${MAINNET_RPC_URL}"  # or leave unset and use ENTROPY_ORACLE_RPC_URL
//! contract_address = "0xBBCD0c8DBdC112dd29af8c57Ee8740bD9feE084B"
//! function_signature = "collectedEntropy(uint256)"
//!
//! [export]
//! output_dir = "./script-outputs"
//! file_name_template = "OnlyRaw-{start_at}-{how_many}.txt"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, ExportConfig, ExporterConfig, LoggingConfig, OracleConfig};
pub use secret::{secret_string, SecretString, SecretValue};
