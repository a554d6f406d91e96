//! Hex payload decoding
//!
//! Turns the raw entropy of one batch into the fixed-width hex chunks that
//! encode individual values, and converts chunks to decimal text.

use crate::domain::{BatchIndex, BatchLayout, ExportError, Result};

/// Removes the two-character `0x` marker from a raw oracle payload
pub fn strip_marker(raw: &str) -> Result<&str> {
    raw.strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| {
            ExportError::Decode(format!(
                "Entropy payload must start with 0x, got: {}",
                raw.chars().take(10).collect::<String>()
            ))
        })
}

/// Splits a hex string into chunks of `width` characters
///
/// The last chunk is shorter when the length is not a multiple of `width`.
/// The input must be ASCII.
pub fn chunk_payload(payload: &str, width: usize) -> Vec<&str> {
    (0..payload.len())
        .step_by(width.max(1))
        .map(|start| &payload[start..(start + width).min(payload.len())])
        .collect()
}

/// Splits one batch of raw entropy into per-value hex chunks
///
/// # Errors
///
/// - [`ExportError::EntropyNotAvailable`] when the payload is empty, which is
///   what the contract returns for a request that has not been fulfilled
/// - [`ExportError::Decode`] when the marker is missing, a character is not
///   hex, or the length doesn't match the layout
pub fn decode_batch<'a>(
    raw: &'a str,
    layout: &BatchLayout,
    batch: BatchIndex,
) -> Result<Vec<&'a str>> {
    let payload = strip_marker(raw)?;

    if payload.is_empty() {
        return Err(ExportError::EntropyNotAvailable {
            batch: batch.value(),
        });
    }

    if let Some(position) = payload.find(|c: char| !c.is_ascii_hexdigit()) {
        return Err(ExportError::Decode(format!(
            "Batch {batch}: non-hex character at position {position}"
        )));
    }

    if payload.len() != layout.payload_hex_len() {
        return Err(ExportError::Decode(format!(
            "Batch {batch}: expected {} hex characters ({} words of {} bytes), got {}",
            layout.payload_hex_len(),
            layout.words_per_batch(),
            layout.bytes_per_word(),
            payload.len()
        )));
    }

    Ok(chunk_payload(payload, layout.hex_chars_per_value()))
}

/// Converts a big-endian hex chunk of at most 16 digits to decimal text
///
/// # Examples
///
/// ```
/// use entropy_export::core::transform::hex_to_decimal;
///
/// assert_eq!(hex_to_decimal("0000000000000001").unwrap(), "1");
/// assert_eq!(hex_to_decimal("ffffffffffffffff").unwrap(), "18446744073709551615");
/// ```
pub fn hex_to_decimal(chunk: &str) -> Result<String> {
    if chunk.is_empty() || chunk.len() > 16 {
        return Err(ExportError::Decode(format!(
            "Value chunk must have 1 to 16 hex digits, got {}",
            chunk.len()
        )));
    }

    u64::from_str_radix(chunk, 16)
        .map(|value| value.to_string())
        .map_err(|e| ExportError::Decode(format!("Invalid hex chunk '{chunk}': {e}")))
}
