//! Minimal Solidity ABI plumbing for a `f(uint256) returns (bytes)` view
//!
//! Call data is the 4-byte selector followed by one 32-byte big-endian word.
//! The return value of a dynamic `bytes` is an offset word, then a length
//! word at that offset, then the data padded to a multiple of 32 bytes.

use sha3::{Digest, Keccak256};

/// Size of one ABI word
const WORD: usize = 32;

/// First four bytes of Keccak-256 of the canonical function signature
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = Keccak256::digest(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// `0x`-prefixed call data for a single `uint256` argument
pub fn encode_uint256_call(selector: [u8; 4], argument: u64) -> String {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&selector);
    data.extend_from_slice(&[0u8; WORD - 8]);
    data.extend_from_slice(&argument.to_be_bytes());
    format!("0x{}", hex::encode(data))
}

/// Decodes an ABI-encoded `bytes` return value from `eth_call` output
///
/// # Errors
///
/// Returns a description of the problem when the payload is not valid hex,
/// is too short, or its offset/length words point outside the payload.
pub fn decode_bytes(output: &str) -> Result<Vec<u8>, String> {
    let digits = output
        .strip_prefix("0x")
        .ok_or_else(|| "eth_call result is missing the 0x prefix".to_string())?;

    if digits.is_empty() {
        return Err("eth_call returned no data; is the contract address correct?".to_string());
    }

    let raw = hex::decode(digits).map_err(|e| format!("eth_call result is not valid hex: {e}"))?;

    let offset = read_usize_word(&raw, 0)?;
    let length = read_usize_word(&raw, offset)?;

    let start = offset
        .checked_add(WORD)
        .ok_or_else(|| "bytes offset overflows".to_string())?;
    let end = start
        .checked_add(length)
        .ok_or_else(|| "bytes length overflows".to_string())?;

    if end > raw.len() {
        return Err(format!(
            "bytes length {length} at offset {offset} exceeds payload of {} bytes",
            raw.len()
        ));
    }

    Ok(raw[start..end].to_vec())
}

/// Reads the word at `position` as a `usize`, rejecting values that don't fit
fn read_usize_word(raw: &[u8], position: usize) -> Result<usize, String> {
    let end = position
        .checked_add(WORD)
        .ok_or_else(|| "word position overflows".to_string())?;
    let word = raw
        .get(position..end)
        .ok_or_else(|| format!("payload too short to read word at byte {position}"))?;

    let (high, low) = word.split_at(WORD - 8);
    if high.iter().any(|&b| b != 0) {
        return Err(format!("word at byte {position} is too large"));
    }

    let mut buf = [0u8; 8];
    buf.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(buf))
        .map_err(|_| format!("word at byte {position} does not fit in usize"))
}
