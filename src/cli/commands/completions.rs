//! Completions command - generate shell completion scripts
//!
//! Writes the completion script for the requested shell to stdout so
//! it can be redirected into the shell's completion directory.

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const INSTALL_HINTS: &str = "\
Install examples:
  bash:  xlsxtract completions bash > ~/.local/share/bash-completion/completions/xlsxtract
  zsh:   xlsxtract completions zsh > ~/.zfunc/_xlsxtract
  fish:  xlsxtract completions fish > ~/.config/fish/completions/xlsxtract.fish";

/// Arguments for the completions command
#[derive(Args, Debug)]
#[command(after_long_help = INSTALL_HINTS)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout().lock());
    Ok(())
}
