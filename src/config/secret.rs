//! Secure credential handling using the secrecy crate
//!
//! JSON-RPC provider URLs usually embed an API key
//! (`https://eth-mainnet.example.io/v2/<key>`), so the RPC URL is held in a
//! `Secret` that zeroes memory on drop and redacts itself in `Debug` output.
//!
//! # Example
//!
//! ```rust
//! use entropy_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let rpc_url = secret_string("https://rpc.example.org/v2/key".to_string());
//! assert_eq!(rpc_url.expose_secret().as_ref(), "https://rpc.example.org/v2/key");
//!
//! // Debug output is redacted
//! assert!(!format!("{rpc_url:?}").contains("key"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Scheme and host only, for log lines and summaries
    ///
    /// Returns `"***"` when the value is not a parseable URL.
    pub fn redacted_url(&self) -> String {
        match url::Url::parse(&self.0) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => format!("{}://{}/***", parsed.scheme(), host),
                None => "***".to_string(),
            },
            Err(_) => "***".to_string(),
        }
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
