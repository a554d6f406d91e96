//! Core business logic
//!
//! - [`export`] - the batch export loop, output writer and progress tracking
//! - [`transform`] - hex payload to decimal value conversion

pub mod export;
pub mod transform;
