//! Entropy transformation
//!
//! Converts raw oracle payloads into the decimal values written to the
//! output file.

pub mod decode;

pub use decode::{chunk_payload, decode_batch, hex_to_decimal, strip_marker};
