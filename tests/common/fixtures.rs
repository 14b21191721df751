// Test fixtures for integration testing

use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory tree fixture holding generated XLSX workbooks
#[allow(dead_code)] // Used in integration tests
pub struct WorkbookTree {
    pub dir: TempDir,
}

#[allow(dead_code)] // Used in integration tests
impl WorkbookTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a single-sheet workbook with one text cell per row
    pub fn add_workbook(&self, relative: &str, cells: &[&str]) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (row, value) in cells.iter().enumerate() {
            worksheet.write_string(row as u32, 0, *value).unwrap();
        }
        workbook.save(&path).unwrap();
        path
    }

    /// Write a workbook mixing text and non-text cells
    pub fn add_mixed_workbook(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "textual").unwrap();
        worksheet.write_number(0, 1, 1234.5).unwrap();
        worksheet.write_boolean(1, 0, false).unwrap();
        worksheet.write_string(1, 1, "  spaced value  ").unwrap();
        workbook.save(&path).unwrap();
        path
    }

    /// Write a file with an .xlsx extension but garbage content
    pub fn add_corrupt_workbook(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"PK\x03\x04 truncated nonsense").unwrap();
        path
    }

    /// Write a non-spreadsheet file the walker should ignore
    pub fn add_other_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
