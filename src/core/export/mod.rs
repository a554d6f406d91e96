//! Export orchestration
//!
//! This module contains the export run loop and its supporting pieces.

pub mod coordinator;
pub mod plan;
pub mod progress;
pub mod summary;
pub mod writer;

pub use coordinator::Exporter;
pub use plan::ExportPlan;
pub use progress::{progress_line, ConsoleProgress, ProgressSink, ProgressTracker};
pub use summary::ExportSummary;
pub use writer::OutputWriter;
