//! Workbook cell text extraction.
//!
//! Opens one XLSX workbook read-only via calamine and pulls the raw
//! text out of every text-typed cell across all sheets, in
//! sheet-then-row-then-column order. Non-text cells (numbers,
//! booleans, dates, formula errors, empty cells) are ignored without
//! error. The workbook handle is scoped to the call and released
//! when extraction finishes or fails.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};

use crate::core::error::{Result, XtractError};

/// Reads trimmed text values out of one workbook
pub struct CellTextReader;

impl CellTextReader {
    /// Extract all non-empty text cell values from a workbook
    ///
    /// Any failure to open or parse the file (corrupt archive, wrong
    /// format, password protection, unreadable permissions) is
    /// returned as a per-file [`XtractError::WorkbookRead`] for the
    /// pipeline to catch.
    pub fn extract_texts(path: &Path) -> Result<Vec<String>> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: XlsxError| XtractError::WorkbookRead {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut texts = Vec::new();

        for sheet_name in &sheet_names {
            let range =
                workbook
                    .worksheet_range(sheet_name)
                    .map_err(|e| XtractError::WorkbookRead {
                        path: path.to_path_buf(),
                        reason: format!("sheet '{sheet_name}': {e}"),
                    })?;

            for row in range.rows() {
                for cell in row {
                    if let Data::String(value) = cell {
                        let trimmed = value.trim();
                        if !trimmed.is_empty() {
                            texts.push(trimmed.to_string());
                        }
                    }
                }
            }
        }

        tracing::debug!("Extracted {} text cells from {:?}", texts.len(), path);

        Ok(texts)
    }
}
