//! Core domain logic (interface-agnostic)
//!
//! This module contains all extraction logic, independent of the
//! CLI surface.
//!
//! # Architecture
//!
//! - **config**: Typed extraction options with defaults
//! - **error**: Error types and Result alias
//! - **types**: Run statistics and the extraction report
//! - **walker**: Recursive XLSX discovery
//! - **reader**: Per-workbook cell text extraction (calamine)
//! - **segmenter**: Whole-cell vs split-word tokenization
//! - **aggregator**: Deduplication and counters
//! - **pipeline**: End-to-end orchestration and persistence

pub mod aggregator;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod segmenter;
pub mod types;
pub mod walker;

// Re-export key types for convenience
pub use config::ExtractConfig;
pub use error::{Result, XtractError};
pub use pipeline::ExtractPipeline;
