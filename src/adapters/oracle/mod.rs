//! VRF oracle integration
//!
//! This module provides the [`EntropySource`] abstraction and its JSON-RPC
//! implementation reading the consumer contract through `eth_call`.

pub mod abi;
pub mod rpc;
pub mod source;

pub use rpc::JsonRpcEntropySource;
pub use source::EntropySource;
