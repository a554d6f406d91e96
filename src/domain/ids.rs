//! Domain identifier types with validation
//!
//! Newtype wrappers for the on-chain identifiers the exporter works with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contract address newtype wrapper
///
/// A 20-byte Ethereum address written as `0x` followed by 40 hex digits.
/// Case is preserved; checksums are not verified.
///
/// # Examples
///
/// ```
/// use entropy_export::domain::ids::ContractAddress;
/// use std::str::FromStr;
///
/// let address = ContractAddress::from_str("0xBBCD0c8DBdC112dd29af8c57Ee8740bD9feE084B").unwrap();
/// assert_eq!(address.as_str(), "0xBBCD0c8DBdC112dd29af8c57Ee8740bD9feE084B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Creates a new ContractAddress from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ContractAddress)` if the address is well-formed, `Err` otherwise
    pub fn new(address: impl Into<String>) -> Result<Self, String> {
        let address = address.into();
        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .ok_or_else(|| format!("Contract address must start with 0x, got: {address}"))?;

        if digits.len() != 40 {
            return Err(format!(
                "Contract address must have 40 hex digits, got {}: {address}",
                digits.len()
            ));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "Contract address contains non-hex characters: {address}"
            ));
        }

        Ok(Self(address))
    }

    /// Wraps an address known to be well-formed
    pub(crate) fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContractAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContractAddress {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContractAddress> for String {
    fn from(address: ContractAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for ContractAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Index of an on-chain VRF request (a "batch" of random words)
///
/// Batches are numbered from 1 by the consumer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatchIndex(u64);

impl BatchIndex {
    /// Creates a new BatchIndex
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    /// Returns the raw index
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the index of the following batch
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BatchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
