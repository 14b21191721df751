//! Token deduplication and run statistics.
//!
//! One aggregator instance owns all mutable state of a run: the
//! unique token set and the counters. It is created by the pipeline
//! and passed into per-file processing, so nothing here is global
//! and a future concurrent design only needs to synchronize this
//! one type.

use std::collections::HashSet;

use crate::core::types::RunStats;

/// Accumulates unique tokens and counters across one run
///
/// The set only grows; tokens are never removed. Insertion is
/// idempotent. Every observed candidate counts toward
/// `total_tokens_seen` whether or not it survives the length bound.
pub struct TokenAggregator {
    tokens: HashSet<String>,
    max_token_len: Option<usize>,
    files_processed: usize,
    files_skipped: usize,
    total_tokens_seen: usize,
}

impl TokenAggregator {
    /// Create an empty aggregator
    ///
    /// # Arguments
    ///
    /// * `max_token_len` - Discard tokens longer than this many
    ///   characters; `None` disables the bound
    pub fn new(max_token_len: Option<usize>) -> Self {
        Self {
            tokens: HashSet::new(),
            max_token_len,
            files_processed: 0,
            files_skipped: 0,
            total_tokens_seen: 0,
        }
    }

    /// Observe one candidate token
    ///
    /// Always bumps `total_tokens_seen`. The token is inserted into
    /// the unique set only when it fits the length bound; over-length
    /// tokens are discarded whole, never truncated.
    ///
    /// Returns `true` when the token was added to the set.
    pub fn observe(&mut self, token: &str) -> bool {
        self.total_tokens_seen += 1;

        if let Some(max) = self.max_token_len {
            if token.chars().count() > max {
                return false;
            }
        }

        if self.tokens.contains(token) {
            return false;
        }

        self.tokens.insert(token.to_string());
        true
    }

    /// Record one successfully processed workbook
    pub fn observe_file(&mut self) {
        self.files_processed += 1;
    }

    /// Record one candidate file that failed to open or parse
    pub fn observe_skipped(&mut self) {
        self.files_skipped += 1;
    }

    /// Number of distinct tokens collected so far
    pub fn unique_count(&self) -> usize {
        self.tokens.len()
    }

    /// Current statistics (duration is filled by the pipeline)
    pub fn snapshot(&self) -> RunStats {
        RunStats {
            files_processed: self.files_processed,
            files_skipped: self.files_skipped,
            total_tokens_seen: self.total_tokens_seen,
            unique_tokens_written: self.tokens.len(),
            duration_ms: 0,
        }
    }

    /// Consume the aggregator and return the sorted unique tokens
    ///
    /// Plain codepoint ordering, case-sensitive: "Apple" and "apple"
    /// are distinct tokens and sort apart.
    pub fn into_sorted_tokens(self) -> Vec<String> {
        let mut tokens: Vec<String> = self.tokens.into_iter().collect();
        tokens.sort_unstable();
        tokens
    }
}
