// entropy-export - on-chain VRF entropy to text file exporter
// Copyright (c) 2025 Entropy Export Contributors
// Licensed under the MIT License

//! # entropy-export
//!
//! Reads the raw entropy a Chainlink VRF consumer contract has collected and
//! exports it as 64-bit unsigned integers, one decimal value per line.
//!
//! ## Overview
//!
//! Every fulfilled VRF request (a *batch*) stores 110 random words of 32 bytes.
//! Each value consumes 8 bytes, so one batch yields 440 values and the value
//! stream is the concatenation of all batches in request order. An export of
//! `how_many` values starting at the 1-based index `start_at` reads only the
//! batches covering that range.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export loop and hex-to-decimal conversion
//! - [`adapters`] - JSON-RPC access to the VRF consumer contract
//! - [`domain`] - Identifiers, batch arithmetic and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use entropy_export::adapters::oracle::JsonRpcEntropySource;
//! use entropy_export::config::load_config_or_default;
//! use entropy_export::core::export::Exporter;
//! use entropy_export::domain::ExportRange;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("entropy-export.toml")?;
//!     let range = ExportRange::new(1, 1000)?;
//!
//!     let source = JsonRpcEntropySource::new(&config.oracle)?;
//!     let exporter = Exporter::new(Arc::new(source), config.export.layout()?);
//!
//!     let summary = exporter.run(range, &config.export.output_path(&range)).await?;
//!     println!("Exported {} values", summary.values_exported);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
