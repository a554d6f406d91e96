//! Batch layout arithmetic
//!
//! A VRF batch holds `words_per_batch` random words of `bytes_per_word` bytes
//! each. Every exported value consumes `entropy_bytes_per_value` bytes, so a
//! batch yields a fixed number of values and the exported sequence is the
//! concatenation of all batches in increasing batch order.

use super::ids::BatchIndex;
use serde::{Deserialize, Serialize};

/// Shape of one oracle batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchLayout {
    entropy_bytes_per_value: u64,
    bytes_per_word: u64,
    words_per_batch: u64,
}

impl Default for BatchLayout {
    /// 8 bytes per value, 32-byte words, 110 words per request: 440 values per batch
    fn default() -> Self {
        Self {
            entropy_bytes_per_value: 8,
            bytes_per_word: 32,
            words_per_batch: 110,
        }
    }
}

impl BatchLayout {
    /// Creates a layout, checking that values tile words exactly and fit a `u64`
    pub fn new(
        entropy_bytes_per_value: u64,
        bytes_per_word: u64,
        words_per_batch: u64,
    ) -> Result<Self, String> {
        if entropy_bytes_per_value == 0 || entropy_bytes_per_value > 8 {
            return Err(format!(
                "entropy_bytes_per_value must be between 1 and 8, got {entropy_bytes_per_value}"
            ));
        }
        if bytes_per_word == 0 || bytes_per_word % entropy_bytes_per_value != 0 {
            return Err(format!(
                "bytes_per_word ({bytes_per_word}) must be a positive multiple of entropy_bytes_per_value ({entropy_bytes_per_value})"
            ));
        }
        if words_per_batch == 0 {
            return Err("words_per_batch must be > 0".to_string());
        }

        let payload_hex_len = bytes_per_word
            .checked_mul(words_per_batch)
            .and_then(|bytes| bytes.checked_mul(2))
            .and_then(|len| usize::try_from(len).ok());
        if payload_hex_len.is_none() {
            return Err(format!(
                "batch of {words_per_batch} words of {bytes_per_word} bytes is too large"
            ));
        }

        Ok(Self {
            entropy_bytes_per_value,
            bytes_per_word,
            words_per_batch,
        })
    }

    pub fn entropy_bytes_per_value(&self) -> u64 {
        self.entropy_bytes_per_value
    }

    pub fn bytes_per_word(&self) -> u64 {
        self.bytes_per_word
    }

    pub fn words_per_batch(&self) -> u64 {
        self.words_per_batch
    }

    /// Number of values one batch yields
    pub fn values_per_batch(&self) -> u64 {
        (self.bytes_per_word / self.entropy_bytes_per_value) * self.words_per_batch
    }

    /// Hex digits encoding one value
    pub fn hex_chars_per_value(&self) -> usize {
        (self.entropy_bytes_per_value * 2) as usize
    }

    /// Hex digits in a full batch payload, without the `0x` marker
    pub fn payload_hex_len(&self) -> usize {
        (self.bytes_per_word * self.words_per_batch * 2) as usize
    }

    /// Batch containing the 1-based value index `start_at`
    pub fn first_batch(&self, start_at: u64) -> BatchIndex {
        BatchIndex::new(start_at.div_ceil(self.values_per_batch()))
    }

    /// Values of the first batch that come before `start_at`
    pub fn ignore_first(&self, start_at: u64) -> u64 {
        (start_at - 1) % self.values_per_batch()
    }
}

/// Requested slice of the value stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRange {
    start_at: u64,
    how_many: u64,
}

impl ExportRange {
    /// Creates a range starting at the 1-based index `start_at`
    pub fn new(start_at: u64, how_many: u64) -> Result<Self, String> {
        if start_at == 0 {
            return Err("start_at must be >= 1".to_string());
        }
        if how_many == 0 {
            return Err("how_many must be >= 1".to_string());
        }
        if (how_many - 1).checked_add(start_at).is_none() {
            return Err("start_at + how_many - 1 overflows".to_string());
        }
        Ok(Self { start_at, how_many })
    }

    pub fn start_at(&self) -> u64 {
        self.start_at
    }

    pub fn how_many(&self) -> u64 {
        self.how_many
    }

    /// 1-based index of the last value in the range
    pub fn end_at(&self) -> u64 {
        self.start_at + self.how_many - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_layout_yields_440_values() {
        let layout = BatchLayout::default();
        assert_eq!(layout.values_per_batch(), 440);
        assert_eq!(layout.hex_chars_per_value(), 16);
        assert_eq!(layout.payload_hex_len(), 7040);
    }

    #[test_case(1, 1, 0 ; "first value")]
    #[test_case(440, 1, 439 ; "last value of first batch")]
    #[test_case(441, 2, 0 ; "first value of second batch")]
    #[test_case(1000, 3, 119 ; "inside third batch")]
    fn test_first_batch_and_ignore_first(start_at: u64, batch: u64, ignore: u64) {
        let layout = BatchLayout::default();
        assert_eq!(layout.first_batch(start_at).value(), batch);
        assert_eq!(layout.ignore_first(start_at), ignore);
    }

    #[test]
    fn test_layout_rejects_values_wider_than_u64() {
        assert!(BatchLayout::new(16, 32, 110).is_err());
        assert!(BatchLayout::new(0, 32, 110).is_err());
    }

    #[test]
    fn test_layout_rejects_untiled_words() {
        let err = BatchLayout::new(8, 20, 110).unwrap_err();
        assert!(err.contains("multiple"));
    }

    #[test]
    fn test_layout_rejects_overflowing_sizes() {
        let err = BatchLayout::new(8, 32, 4_611_686_018_427_387_904).unwrap_err();
        assert!(err.contains("too large"));
        assert!(BatchLayout::new(8, u64::MAX - 7, 2).is_err());
        assert!(BatchLayout::new(1, u64::MAX, 1).is_err());
    }

    #[test]
    fn test_layout_rejects_empty_batch() {
        assert!(BatchLayout::new(8, 32, 0).is_err());
    }

    #[test]
    fn test_small_layout() {
        let layout = BatchLayout::new(8, 16, 2).unwrap();
        assert_eq!(layout.values_per_batch(), 4);
        assert_eq!(layout.first_batch(5).value(), 2);
        assert_eq!(layout.ignore_first(6), 1);
    }

    #[test]
    fn test_export_range_validation() {
        assert!(ExportRange::new(0, 10).is_err());
        assert!(ExportRange::new(1, 0).is_err());
        assert!(ExportRange::new(u64::MAX, 2).is_err());

        let last = ExportRange::new(u64::MAX, 1).unwrap();
        assert_eq!(last.end_at(), u64::MAX);

        let range = ExportRange::new(441, 100).unwrap();
        assert_eq!(range.end_at(), 540);
    }
}
