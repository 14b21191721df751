//! CLI adapter for xlsxtract
//!
//! Provides the command-line interface on top of the core extraction
//! pipeline. This module owns argument parsing and output rendering;
//! all extraction logic lives in `core/`.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// xlsxtract - XLSX wordlist extractor
///
/// Recursively scans a directory for XLSX spreadsheets, extracts the
/// text from every cell and writes a deduplicated, sorted word list
/// for password auditing.
#[derive(Parser, Debug)]
#[command(name = "xlsxtract")]
#[command(author = "Garland Glessner <gglessner@gmail.com>")]
#[command(version)]
#[command(about = "Extract text from XLSX files into wordlists", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a wordlist from all XLSX files under a directory
    Extract(commands::ExtractArgs),

    /// Generate shell completion scripts
    ///
    /// Writes the script to stdout; the long help lists install
    /// locations per shell.
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Extract(args) => commands::extract::execute(args, cli.format),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
