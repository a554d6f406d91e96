//! JSON-RPC entropy source
//!
//! Reads `collectedEntropy(uint256)` through `eth_call` on an Ethereum node.
//! Each read is a single POST; there is no retry.

use super::abi;
use super::EntropySource;
use crate::config::{OracleConfig, SecretString};
use crate::domain::{BatchIndex, ContractAddress, ExportError, OracleError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// `eth_call`-backed [`EntropySource`]
///
/// # Example
///
/// ```no_run
/// use entropy_export::adapters::oracle::{EntropySource, JsonRpcEntropySource};
/// use entropy_export::config::{secret_string, OracleConfig};
/// use entropy_export::domain::BatchIndex;
///
/// # async fn example() -> entropy_export::domain::Result<()> {
/// let config = OracleConfig {
///     rpc_url: Some(secret_string("http://localhost:8545".to_string())),
///     ..Default::default()
/// };
/// let source = JsonRpcEntropySource::new(&config)?;
/// let hex = source.collected_entropy(BatchIndex::new(1)).await?;
/// # Ok(())
/// # }
/// ```
pub struct JsonRpcEntropySource {
    /// Node endpoint, kept secret because it usually carries an API key
    rpc_url: SecretString,

    /// HTTP client for making requests
    client: Client,

    contract_address: ContractAddress,
    selector: [u8; 4],
    function_signature: String,
    block_tag: String,

    /// JSON-RPC request id counter
    next_id: AtomicU64,
}

impl JsonRpcEntropySource {
    /// Create a new source from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no RPC URL is set or the HTTP client
    /// cannot be built.
    pub fn new(config: &OracleConfig) -> Result<Self> {
        let rpc_url = config.rpc_url.clone().ok_or_else(|| {
            ExportError::Configuration(
                "oracle.rpc_url is required (set it in the config file or ENTROPY_ORACLE_RPC_URL)"
                    .to_string(),
            )
        })?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ExportError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            rpc_url,
            client,
            contract_address: config.contract_address.clone(),
            selector: abi::selector(&config.function_signature),
            function_signature: config.function_signature.clone(),
            block_tag: config.block_tag.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Perform a raw `eth_call` and return the hex result
    async fn eth_call(&self, data: &str) -> Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "eth_call",
            "params": [
                {
                    "to": self.contract_address.as_str(),
                    "data": data,
                },
                self.block_tag,
            ],
        });

        let response = self
            .client
            .post(self.rpc_url.expose_secret().as_ref())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout(e.without_url().to_string())
                } else {
                    OracleError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OracleError::Http {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let envelope: RpcResponse = response.json().await.map_err(|e| {
            OracleError::InvalidResponse(format!(
                "Failed to parse JSON-RPC response: {}",
                e.without_url()
            ))
        })?;

        if let Some(error) = envelope.error {
            return Err(OracleError::Rpc {
                code: error.code,
                message: error.message,
            }
            .into());
        }

        envelope.result.ok_or_else(|| {
            OracleError::InvalidResponse("JSON-RPC response has neither result nor error".into())
                .into()
        })
    }
}

#[async_trait]
impl EntropySource for JsonRpcEntropySource {
    async fn collected_entropy(&self, batch: BatchIndex) -> Result<String> {
        let data = abi::encode_uint256_call(self.selector, batch.value());

        tracing::debug!(
            batch = batch.value(),
            contract = %self.contract_address,
            function = %self.function_signature,
            "Reading collected entropy"
        );

        let output = self.eth_call(&data).await?;
        let bytes = abi::decode_bytes(&output).map_err(OracleError::InvalidResponse)?;

        tracing::trace!(batch = batch.value(), bytes = bytes.len(), "Entropy received");

        Ok(format!("0x{}", hex::encode(bytes)))
    }

    fn describe(&self) -> String {
        format!(
            "{} on {} via {}",
            self.function_signature,
            self.contract_address,
            self.rpc_url.expose_secret().redacted_url()
        )
    }
}
