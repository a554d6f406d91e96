//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ContractAddress`], [`BatchIndex`])
//! - **Batch arithmetic** ([`BatchLayout`], [`ExportRange`])
//! - **Error types** ([`ExportError`], [`OracleError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use entropy_export::domain::{BatchLayout, ExportRange};
//!
//! let layout = BatchLayout::default();
//! let range = ExportRange::new(1000, 50).unwrap();
//!
//! // Value 1000 lives in the third batch, after 119 earlier values
//! assert_eq!(layout.first_batch(range.start_at()).value(), 3);
//! assert_eq!(layout.ignore_first(range.start_at()), 119);
//! ```

pub mod errors;
pub mod ids;
pub mod layout;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ExportError, OracleError};
pub use ids::{BatchIndex, ContractAddress};
pub use layout::{BatchLayout, ExportRange};
pub use result::Result;
