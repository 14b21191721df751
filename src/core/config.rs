//! Extraction configuration.
//!
//! Typed options for one extraction run, built from CLI arguments
//! with sensible defaults for all settings.

use crate::core::error::{Result, XtractError};
use serde::{Deserialize, Serialize};

/// Options controlling segmentation, filtering and progress output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Split cell text on whitespace into individual words
    #[serde(default)]
    pub split_words: bool,

    /// Discard tokens longer than this many characters
    /// (None = unlimited)
    #[serde(default = "default_max_token_len")]
    pub max_token_len: Option<usize>,

    /// Only consider files whose basename equals this
    /// (case-insensitive)
    #[serde(default)]
    pub filename: Option<String>,

    /// Emit each token to stderr as it is extracted
    #[serde(default)]
    pub progress: bool,

    /// Suppress per-file progress lines
    #[serde(default)]
    pub quiet: bool,
}

fn default_max_token_len() -> Option<usize> {
    Some(32)
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            split_words: false,
            max_token_len: default_max_token_len(),
            filename: None,
            progress: false,
            quiet: false,
        }
    }
}

impl ExtractConfig {
    /// Validate option combinations
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.max_token_len {
            return Err(XtractError::ConfigError(
                "Maximum token length must be at least 1 \
                 (omit the bound to disable it)"
                    .to_string(),
            ));
        }

        if let Some(name) = &self.filename {
            if name.trim().is_empty() {
                return Err(XtractError::ConfigError(
                    "Filename filter cannot be empty".to_string(),
                ));
            }
            if name.contains(std::path::is_separator) {
                return Err(XtractError::ConfigError(format!(
                    "Filename filter '{name}' must be a bare file name, \
                     not a path"
                )));
            }
        }

        Ok(())
    }
}
