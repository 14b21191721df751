//! Extraction pipeline orchestration.
//!
//! Coordinates the end-to-end extraction workflow:
//! 1. Walk directory tree for candidate workbooks
//! 2. Read text cells from each workbook
//! 3. Segment cell text into tokens
//! 4. Deduplicate and accumulate statistics
//! 5. Sort and persist the final word list

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::core::aggregator::TokenAggregator;
use crate::core::config::ExtractConfig;
use crate::core::error::{Result, XtractError};
use crate::core::reader::CellTextReader;
use crate::core::segmenter::{SegmentMode, WordSegmenter};
use crate::core::types::ExtractReport;
use crate::core::walker::XlsxWalker;

/// Orchestrates the extraction pipeline
///
/// Files are processed strictly one at a time. Per-file read
/// failures are logged, counted as skipped and never abort the run;
/// only an invalid root directory or an unwritable output file is
/// fatal.
pub struct ExtractPipeline {
    config: ExtractConfig,
    walker: XlsxWalker,
    segmenter: WordSegmenter,
}

impl ExtractPipeline {
    /// Create a new pipeline from validated options
    pub fn new(config: ExtractConfig) -> Result<Self> {
        config.validate()?;

        let walker = XlsxWalker::new(config.filename.clone());
        let segmenter = WordSegmenter::new(SegmentMode::from_split_flag(config.split_words));

        Ok(Self {
            config,
            walker,
            segmenter,
        })
    }

    /// Extract tokens from every workbook under `root`
    ///
    /// Returns the sorted, deduplicated word list plus run
    /// statistics. Zero candidate files is a valid outcome, not an
    /// error.
    pub fn extract(&self, root: &Path) -> Result<ExtractReport> {
        if !root.is_dir() {
            return Err(XtractError::InvalidDirectory(format!(
                "'{}' does not exist or is not a directory",
                root.display()
            )));
        }

        let start = Instant::now();

        tracing::info!("Scanning {:?} for XLSX files", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} candidate files", files.len());

        if !self.config.quiet {
            eprintln!("Found {} XLSX files", files.len());
        }

        let mut aggregator = TokenAggregator::new(self.config.max_token_len);

        for path in &files {
            match CellTextReader::extract_texts(path) {
                Ok(texts) => {
                    let before = aggregator.unique_count();

                    for text in &texts {
                        for token in self.segmenter.segment(text) {
                            if self.config.progress {
                                eprintln!("Extracting: {token}");
                            }
                            aggregator.observe(&token);
                        }
                    }
                    aggregator.observe_file();

                    let found = aggregator.unique_count() - before;
                    if !self.config.quiet && !self.config.progress {
                        eprintln!("Processed: {} - {} new words", path.display(), found);
                    }
                    tracing::debug!("Processed {:?} ({} new tokens)", path, found);
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    if !self.config.quiet {
                        eprintln!("Skipping {}: {}", path.display(), e);
                    }
                    aggregator.observe_skipped();
                    // Continue processing other files
                }
            }
        }

        let mut stats = aggregator.snapshot();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Extraction complete: {} files processed, {} skipped, \
             {} unique tokens in {}ms",
            stats.files_processed,
            stats.files_skipped,
            stats.unique_tokens_written,
            stats.duration_ms
        );

        Ok(ExtractReport {
            tokens: aggregator.into_sorted_tokens(),
            stats,
        })
    }

    /// Run the pipeline and persist the word list to `output`
    ///
    /// Convenience wrapper over [`extract`](Self::extract) and
    /// [`write_wordlist`].
    pub fn run(&self, root: &Path, output: &Path) -> Result<ExtractReport> {
        let report = self.extract(root)?;
        write_wordlist(&report.tokens, output)?;
        Ok(report)
    }
}

/// Write tokens to a UTF-8 text file, one per line, newline-terminated
///
/// The destination is created or truncated. Failure here is fatal to
/// the run.
pub fn write_wordlist(tokens: &[String], output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|e| XtractError::OutputWrite {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);

    for token in tokens {
        writeln!(writer, "{token}").map_err(|e| XtractError::OutputWrite {
            path: output.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| XtractError::OutputWrite {
        path: output.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::info!("Wrote {} tokens to {:?}", tokens.len(), output);

    Ok(())
}
