//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a
//! specific CLI command.

pub mod completions;
pub mod extract;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use extract::ExtractArgs;
