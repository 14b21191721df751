//! Word segmentation.
//!
//! Turns one trimmed cell text into candidate tokens. Whole mode
//! keeps the text as a single token; split mode breaks it on runs of
//! whitespace. Pure function of its inputs: no shared state, same
//! input always yields the same sequence.
//!
//! The maximum-length bound is *not* applied here. Over-length
//! candidates must still count toward `total_tokens_seen`, so the
//! bound lives in the aggregator where that counter is maintained.

/// Segmentation policy for cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    /// Whole trimmed cell text is one token
    Whole,
    /// Split on whitespace into individual words
    SplitWords,
}

impl SegmentMode {
    /// Map the CLI flag onto a mode
    pub fn from_split_flag(split_words: bool) -> Self {
        if split_words {
            Self::SplitWords
        } else {
            Self::Whole
        }
    }
}

/// Produces candidate tokens from raw cell text
#[derive(Debug, Clone, Copy)]
pub struct WordSegmenter {
    mode: SegmentMode,
}

impl WordSegmenter {
    pub fn new(mode: SegmentMode) -> Self {
        Self { mode }
    }

    /// Segment one cell text into candidate tokens
    ///
    /// Input is trimmed before segmentation; empty pieces are
    /// dropped, so every returned token is non-empty.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        match self.mode {
            SegmentMode::Whole => vec![trimmed.to_string()],
            SegmentMode::SplitWords => trimmed
                .split_whitespace()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}
