//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Console output on stderr, leaving stdout for progress lines
//! - Configurable log levels
//! - Optional JSON file logging with rotation

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
