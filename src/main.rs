//! xlsxtract entry point
//!
//! Command-line interface for mining XLSX spreadsheets into
//! deduplicated wordlists.
//!
//! # Examples
//!
//! ```bash
//! # Extract whole cell values from a share
//! xlsxtract extract /mnt/fileshare
//!
//! # Split cells into individual words, custom output
//! xlsxtract extract /mnt/fileshare -w -o words.txt
//!
//! # Only look at files named budget.xlsx, any case
//! xlsxtract extract /mnt/fileshare -f budget.xlsx
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xlsxtract::cli::{output, run, Cli};

fn main() {
    // Initialize tracing; stderr only, stdout is reserved for data
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xlsxtract=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
