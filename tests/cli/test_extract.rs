//! Tests for the extract CLI command
//!
//! Tests the extract command handler:
//! - Extracting from a fixture tree (human and JSON formats)
//! - Flag handling (split words, max length, filename filter)
//! - Error cases (invalid directory, unwritable output)

use crate::common::WorkbookTree;
use std::fs;
use std::path::PathBuf;
use xlsxtract::cli::commands::extract::{execute, ExtractArgs};
use xlsxtract::cli::OutputFormat;

fn args_for(tree: &WorkbookTree, output: PathBuf) -> ExtractArgs {
    ExtractArgs {
        directory: tree.path().to_path_buf(),
        output,
        split_words: false,
        progress: false,
        max_length: 32,
        filename: None,
        quiet: true,
    }
}

/// Test extracting a fixture tree (human format)
#[test]
fn test_extract_human() {
    let tree = WorkbookTree::new();
    tree.add_workbook("book.xlsx", &["hello", "world"]);
    let output = tree.path().join("words.txt");

    let args = args_for(&tree, output.clone());
    let result = execute(args, OutputFormat::Human);

    assert!(result.is_ok(), "Extract should succeed: {:?}", result.err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "hello\nworld\n");
}

/// Test extracting a fixture tree (JSON format)
#[test]
fn test_extract_json() {
    let tree = WorkbookTree::new();
    tree.add_workbook("book.xlsx", &["token"]);
    let output = tree.path().join("words.txt");

    let args = args_for(&tree, output.clone());
    let result = execute(args, OutputFormat::Json);

    assert!(result.is_ok(), "Extract (JSON) should succeed");
    assert!(output.exists());
}

/// Test split-words flag
#[test]
fn test_extract_split_words() {
    let tree = WorkbookTree::new();
    tree.add_workbook("book.xlsx", &["admin s3cret"]);
    let output = tree.path().join("words.txt");

    let mut args = args_for(&tree, output.clone());
    args.split_words = true;

    execute(args, OutputFormat::Human).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "admin\ns3cret\n");
}

/// Test that max-length 0 disables the bound
#[test]
fn test_extract_unbounded_length() {
    let tree = WorkbookTree::new();
    let long_value = "x".repeat(100);
    tree.add_workbook("book.xlsx", &[long_value.as_str()]);
    let output = tree.path().join("words.txt");

    let mut args = args_for(&tree, output.clone());
    args.max_length = 0;

    execute(args, OutputFormat::Human).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.trim_end(), long_value);
}

/// Test the default 32-character bound drops long values
#[test]
fn test_extract_default_length_bound() {
    let tree = WorkbookTree::new();
    let long_value = "y".repeat(33);
    tree.add_workbook("book.xlsx", &["short", long_value.as_str()]);
    let output = tree.path().join("words.txt");

    let args = args_for(&tree, output.clone());
    execute(args, OutputFormat::Human).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "short\n");
}

/// Test filename filter plumbing through the CLI
#[test]
fn test_extract_filename_filter() {
    let tree = WorkbookTree::new();
    tree.add_workbook("Budget.xlsx", &["kept"]);
    tree.add_workbook("Misc.xlsx", &["dropped"]);
    let output = tree.path().join("words.txt");

    let mut args = args_for(&tree, output.clone());
    args.filename = Some("budget.xlsx".to_string());

    execute(args, OutputFormat::Human).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "kept\n");
}

/// Test extract on a non-existent directory fails
#[test]
fn test_extract_invalid_directory() {
    let args = ExtractArgs {
        directory: "/nonexistent/path/that/does/not/exist".into(),
        output: "unused.txt".into(),
        split_words: false,
        progress: false,
        max_length: 32,
        filename: None,
        quiet: true,
    };

    let result = execute(args, OutputFormat::Human);
    assert!(result.is_err(), "Extract from missing directory should fail");
}

/// Test extract with an unwritable output path fails
#[test]
fn test_extract_unwritable_output() {
    let tree = WorkbookTree::new();
    tree.add_workbook("book.xlsx", &["value"]);

    let args = args_for(&tree, PathBuf::from("/nonexistent/dir/out.txt"));
    let result = execute(args, OutputFormat::Human);

    assert!(result.is_err(), "Unwritable output should fail");
}

/// Test extract over an empty directory succeeds with zero files
#[test]
fn test_extract_empty_directory() {
    let tree = WorkbookTree::new();
    let output = tree.path().join("words.txt");

    let args = args_for(&tree, output.clone());
    let result = execute(args, OutputFormat::Human);

    assert!(result.is_ok(), "Zero files is a valid outcome");
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

/// Test corrupt workbooks do not fail the command
#[test]
fn test_extract_with_corrupt_file() {
    let tree = WorkbookTree::new();
    tree.add_workbook("good.xlsx", &["ok"]);
    tree.add_corrupt_workbook("broken.xlsx");
    let output = tree.path().join("words.txt");

    let args = args_for(&tree, output.clone());
    let result = execute(args, OutputFormat::Human);

    assert!(result.is_ok(), "Corrupt file should be skipped, not fatal");
    assert_eq!(fs::read_to_string(&output).unwrap(), "ok\n");
}
