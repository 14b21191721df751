//! Core data types for xlsxtract.
//!
//! This module defines the data structures shared between the
//! extraction pipeline and the CLI: run statistics and the final
//! extraction report.

use serde::{Deserialize, Serialize};

/// Statistics from one extraction run
///
/// `total_tokens_seen` counts every candidate token before
/// deduplication, including tokens later discarded by the length
/// bound. `unique_tokens_written` equals the final size of the
/// unique set, so `total_tokens_seen >= unique_tokens_written`
/// always holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of workbooks successfully processed
    pub files_processed: usize,

    /// Number of candidate files that failed to open or parse
    pub files_skipped: usize,

    /// Total candidate tokens observed (pre-dedup, pre-filter)
    pub total_tokens_seen: usize,

    /// Distinct tokens in the final word list
    pub unique_tokens_written: usize,

    /// Extraction duration in milliseconds
    pub duration_ms: u64,
}

/// Result of a full extraction run
///
/// Tokens are sorted lexicographically (codepoint order,
/// case-sensitive) and contain no duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractReport {
    /// Sorted, deduplicated word list
    pub tokens: Vec<String>,

    /// Run statistics
    pub stats: RunStats,
}
