//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! valid configuration. Exporting additionally needs `oracle.rpc_url`.

use crate::config::SecretString;
use crate::domain::{BatchLayout, ContractAddress, ExportRange};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Consumer contract that stores the collected VRF entropy
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xBBCD0c8DBdC112dd29af8c57Ee8740bD9feE084B";

/// View function returning the raw entropy of one VRF request
pub const DEFAULT_FUNCTION_SIGNATURE: &str = "collectedEntropy(uint256)";

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Oracle (JSON-RPC node and contract) settings
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.oracle.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Oracle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// JSON-RPC endpoint of an Ethereum node
    #[serde(default)]
    pub rpc_url: Option<SecretString>,

    /// Address of the entropy consumer contract
    #[serde(default = "default_contract_address")]
    pub contract_address: ContractAddress,

    /// Solidity signature of the view function taking the batch index
    #[serde(default = "default_function_signature")]
    pub function_signature: String,

    /// Block tag for `eth_call` (latest, safe, finalized or a hex number)
    #[serde(default = "default_block_tag")]
    pub block_tag: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Verify TLS certificates
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            contract_address: default_contract_address(),
            function_signature: default_function_signature(),
            block_tag: default_block_tag(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

impl OracleConfig {
    fn validate(&self) -> Result<(), String> {
        // Absence is reported when a source is built; planning works without it
        if let Some(rpc_url) = &self.rpc_url {
            if rpc_url.expose_secret().is_empty() {
                return Err("oracle.rpc_url cannot be empty".to_string());
            }

            let parsed = url::Url::parse(rpc_url.expose_secret().as_ref())
                .map_err(|e| format!("oracle.rpc_url is not a valid URL: {e}"))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(format!(
                    "oracle.rpc_url must use http or https, got '{}'",
                    parsed.scheme()
                ));
            }
        }

        if !is_function_signature(&self.function_signature) {
            return Err(format!(
                "Invalid oracle.function_signature '{}'. Expected a form like collectedEntropy(uint256)",
                self.function_signature
            ));
        }

        let named_tags = ["latest", "safe", "finalized", "pending", "earliest"];
        let is_hex_block = self
            .block_tag
            .strip_prefix("0x")
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_hexdigit()));
        if !named_tags.contains(&self.block_tag.as_str()) && !is_hex_block {
            return Err(format!(
                "Invalid oracle.block_tag '{}'. Must be one of: {} or a 0x-prefixed block number",
                self.block_tag,
                named_tags.join(", ")
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("oracle.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// `name(uint256)` with a single unsigned integer argument
fn is_function_signature(signature: &str) -> bool {
    let Some((name, rest)) = signature.split_once('(') else {
        return false;
    };
    let valid_name = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());

    valid_name && rest == "uint256)"
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving the output files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name with `{start_at}` and `{how_many}` placeholders
    #[serde(default = "default_file_name_template")]
    pub file_name_template: String,

    /// Bytes of entropy consumed by each exported value
    #[serde(default = "default_entropy_bytes_per_value")]
    pub entropy_bytes_per_value: u64,

    /// Bytes in one VRF random word
    #[serde(default = "default_bytes_per_word")]
    pub bytes_per_word: u64,

    /// Random words returned by one VRF request
    #[serde(default = "default_words_per_request")]
    pub words_per_request: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name_template: default_file_name_template(),
            entropy_bytes_per_value: default_entropy_bytes_per_value(),
            bytes_per_word: default_bytes_per_word(),
            words_per_request: default_words_per_request(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        if self.file_name_template.trim().is_empty() {
            return Err("export.file_name_template cannot be empty".to_string());
        }
        if self.file_name_template.contains('/') || self.file_name_template.contains('\\') {
            return Err(
                "export.file_name_template must be a file name, not a path".to_string(),
            );
        }

        self.layout().map(|_| ())
    }

    /// Batch layout described by this section
    pub fn layout(&self) -> Result<BatchLayout, String> {
        BatchLayout::new(
            self.entropy_bytes_per_value,
            self.bytes_per_word,
            self.words_per_request,
        )
    }

    /// Output file for a given range
    pub fn output_path(&self, range: &ExportRange) -> PathBuf {
        let file_name = self
            .file_name_template
            .replace("{start_at}", &range.start_at().to_string())
            .replace("{how_many}", &range.how_many().to_string());
        PathBuf::from(&self.output_dir).join(file_name)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_contract_address() -> ContractAddress {
    ContractAddress::new_unchecked(DEFAULT_CONTRACT_ADDRESS)
}

fn default_function_signature() -> String {
    DEFAULT_FUNCTION_SIGNATURE.to_string()
}

fn default_block_tag() -> String {
    "latest".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_output_dir() -> String {
    "./script-outputs".to_string()
}

fn default_file_name_template() -> String {
    "OnlyRaw-{start_at}-{how_many}.txt".to_string()
}

fn default_entropy_bytes_per_value() -> u64 {
    8
}

fn default_bytes_per_word() -> u64 {
    32
}

fn default_words_per_request() -> u64 {
    110
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
