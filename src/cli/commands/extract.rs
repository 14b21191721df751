//! Extract command - mine a directory tree of XLSX files into a wordlist

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::ExtractConfig;
use crate::core::pipeline::ExtractPipeline;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory to scan recursively for XLSX files
    pub directory: PathBuf,

    /// Output file for the extracted word list (overwritten if present)
    #[arg(long, short = 'o', default_value = "passwords.txt")]
    pub output: PathBuf,

    /// Split cell contents on whitespace into individual words
    #[arg(long, short = 'w')]
    pub split_words: bool,

    /// Show each extracted word as it is found
    #[arg(long, short = 'p')]
    pub progress: bool,

    /// Discard words longer than this many characters (0 = unlimited)
    #[arg(long, default_value_t = 32)]
    pub max_length: usize,

    /// Only process files with this exact name (case-insensitive)
    #[arg(long, short = 'f')]
    pub filename: Option<String>,

    /// Suppress per-file progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Extraction result response
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub directory: String,
    pub output: String,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_tokens_seen: usize,
    pub unique_tokens_written: usize,
    pub duration_secs: f64,
    pub split_words: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Execute the extract command
pub fn execute(args: ExtractArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    // Validate path
    let directory = args.directory.canonicalize().map_err(|e| {
        format!(
            "Invalid directory '{}': {}. Make sure the path exists and is accessible.",
            args.directory.display(),
            e
        )
    })?;

    if !directory.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Point xlsxtract at the root of the tree to scan.",
            directory.display()
        )
        .into());
    }

    // 0 disables the length bound
    let max_token_len = if args.max_length == 0 {
        None
    } else {
        Some(args.max_length)
    };

    let config = ExtractConfig {
        split_words: args.split_words,
        max_token_len,
        filename: args.filename.clone(),
        progress: args.progress,
        quiet: args.quiet || format == OutputFormat::Json,
    };

    if !config.quiet {
        eprintln!(
            "Scanning {} for XLSX files...",
            colors::file_path(&directory.display().to_string())
        );
    }

    let pipeline = ExtractPipeline::new(config)?;
    let report = pipeline.run(&directory, &args.output)?;

    if report.stats.files_processed == 0
        && report.stats.files_skipped == 0
        && format == OutputFormat::Human
    {
        print_warning(&format!("No XLSX files found in {}", directory.display()));
    }

    let response = ExtractResponse {
        directory: directory.to_string_lossy().into_owned(),
        output: args.output.to_string_lossy().into_owned(),
        files_processed: report.stats.files_processed,
        files_skipped: report.stats.files_skipped,
        total_tokens_seen: report.stats.total_tokens_seen,
        unique_tokens_written: report.stats.unique_tokens_written,
        duration_secs: report.stats.duration_ms as f64 / 1000.0,
        split_words: args.split_words,
        max_length: max_token_len,
        filename: args.filename,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Processing complete"));
            println!(
                "Files processed: {}",
                colors::number(&response.files_processed.to_string())
            );
            if response.files_skipped > 0 {
                println!(
                    "Files skipped: {}",
                    colors::warning(&response.files_skipped.to_string())
                );
            }
            println!(
                "Total words found: {}",
                colors::number(&response.total_tokens_seen.to_string())
            );
            println!(
                "Unique words written: {}",
                colors::number(&response.unique_tokens_written.to_string())
            );
            if let Some(max) = response.max_length {
                println!("Length bound: {}", colors::number(&max.to_string()));
            }
            if let Some(name) = &response.filename {
                println!("Filename filter: {}", colors::dim(name));
            }
            println!(
                "{} {} in {}",
                colors::success("Results written to"),
                colors::file_path(&response.output),
                colors::number(&format_duration(response.duration_secs))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
