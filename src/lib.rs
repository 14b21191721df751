//! xlsxtract - XLSX wordlist extractor
//!
//! Mines candidate password strings from XLSX spreadsheets: walks a
//! directory tree, pulls the text out of every cell in every sheet,
//! deduplicates the results and writes a sorted line-oriented word
//! list with summary statistics.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Extraction logic (interface-agnostic)
//!   - config, error, types
//!   - walker (XLSX discovery)
//!   - reader (cell text extraction via calamine)
//!   - segmenter (whole-cell vs split-word tokenization)
//!   - aggregator (deduplication, counters)
//!   - pipeline (orchestration, persistence)
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Behaviors
//!
//! - Text-typed cells only; numbers, dates and booleans are ignored
//! - Corrupt or unreadable workbooks are skipped, never fatal
//! - Output is sorted and deterministic regardless of traversal order
//! - Single-threaded, strictly sequential file processing

// Core extraction logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::ExtractConfig;
pub use core::error::{Result, XtractError};
pub use core::pipeline::ExtractPipeline;
pub use core::types::{ExtractReport, RunStats};
