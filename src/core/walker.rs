//! File system walker for XLSX discovery.
//!
//! Traverses directory trees and collects candidate workbooks by
//! extension, with an optional case-insensitive exact-filename
//! filter. Handles errors gracefully (permission denied, etc.)
//! without crashing: unreadable subtrees are logged and skipped.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::Result;

/// Target extension, matched case-insensitively
const XLSX_EXTENSION: &str = "xlsx";

/// Recursive walker that yields `.xlsx` files under a root
pub struct XlsxWalker {
    /// Optional exact basename to match (case-insensitive)
    filename: Option<String>,
}

impl XlsxWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `filename` - When set, only files whose basename equals
    ///   this value case-insensitively are considered candidates
    pub fn new(filename: Option<String>) -> Self {
        Self { filename }
    }

    /// Collect all candidate workbook paths from a directory
    ///
    /// Traverses the tree without following symlinks. Traversal
    /// errors on individual entries (unreadable directory, broken
    /// link) are logged and the walk continues; one bad subtree
    /// never aborts the run.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if self.is_candidate(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        Ok(files)
    }

    /// Check whether a path passes the extension and filename filters
    fn is_candidate(&self, path: &Path) -> bool {
        let has_xlsx_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION))
            .unwrap_or(false);

        if !has_xlsx_extension {
            return false;
        }

        match &self.filename {
            Some(wanted) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.eq_ignore_ascii_case(wanted))
                .unwrap_or(false),
            None => true,
        }
    }
}
