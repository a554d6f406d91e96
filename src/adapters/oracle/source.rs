//! Entropy source trait definition
//!
//! The exporter only needs one capability from the oracle: read the raw
//! entropy collected for a given VRF request. This trait abstracts the
//! transport so the export loop can be driven by an in-memory source in tests.

use crate::domain::{BatchIndex, Result};
use async_trait::async_trait;

/// Read-only access to the entropy stored by the VRF consumer contract
#[async_trait]
pub trait EntropySource: Send + Sync {
    /// Raw entropy of one batch as a `0x`-prefixed, big-endian hex string
    ///
    /// An unfulfilled request yields `"0x"` (no bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the node cannot be reached or the response is
    /// malformed.
    async fn collected_entropy(&self, batch: BatchIndex) -> Result<String>;

    /// Human-readable description of where entropy comes from, for logs
    fn describe(&self) -> String;
}
