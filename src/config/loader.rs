//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use super::secret::secret_string;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use crate::domain::ContractAddress;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (ENTROPY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use entropy_export::config::loader::load_config;
///
/// let config = load_config("entropy-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Loads the file if it exists, otherwise starts from built-in defaults
///
/// Overrides and validation apply in both cases, so a run configured purely
/// through `ENTROPY_*` variables works without any file.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = ExporterConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut ExporterConfig) -> Result<()> {
    apply_env_overrides(config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied verbatim.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Other(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ENTROPY_* prefix
///
/// Environment variables follow the pattern: ENTROPY_<SECTION>_<KEY>
/// For example: ENTROPY_ORACLE_RPC_URL, ENTROPY_EXPORT_OUTPUT_DIR
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("ENTROPY_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Oracle overrides
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_RPC_URL") {
        config.oracle.rpc_url = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_CONTRACT_ADDRESS") {
        config.oracle.contract_address = ContractAddress::new(val).map_err(|e| {
            ExportError::Configuration(format!("ENTROPY_ORACLE_CONTRACT_ADDRESS: {e}"))
        })?;
    }
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_FUNCTION_SIGNATURE") {
        config.oracle.function_signature = val;
    }
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_BLOCK_TAG") {
        config.oracle.block_tag = val;
    }
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.oracle.timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("ENTROPY_ORACLE_TLS_VERIFY") {
        config.oracle.tls_verify = val.parse().unwrap_or(true);
    }

    // Export overrides
    if let Ok(val) = std::env::var("ENTROPY_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("ENTROPY_EXPORT_FILE_NAME_TEMPLATE") {
        config.export.file_name_template = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ENTROPY_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ENTROPY_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
