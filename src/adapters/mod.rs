//! External system adapters
//!
//! - [`oracle`] - on-chain VRF entropy reads over JSON-RPC

pub mod oracle;
