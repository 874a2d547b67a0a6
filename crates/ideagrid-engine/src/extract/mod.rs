//! Project extraction API.
//!
//! This module turns a loosely structured department sheet into project records:
//!
//! - [`detect_header_row`] - Find the header row by keyword scoring
//! - [`ColumnRoles`] - Map column titles to supervisor, area and idea roles
//! - [`flatten_rows`] - Emit one [`ProjectRecord`] per filled idea cell
//! - [`extract_from_sheet`] - All of the above in one call
//! - [`keywords`] - The keyword tables behind the heuristics

mod columns;
mod flatten;
mod header;
pub mod keywords;

pub use columns::ColumnRoles;
pub use flatten::{ProjectRecord, UNKNOWN_AREA, UNKNOWN_SUPERVISOR, flatten_rows};
pub use header::{HEADER_SCAN_ROWS, HeaderMatch, detect_header_row};

use crate::sheet::{ParsedSheet, Sheet};

/// Intermediate results of one extraction, kept for inspection.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub header: HeaderMatch,
    pub parsed: ParsedSheet,
    pub roles: ColumnRoles,
}

impl Extraction {
    /// Detect the header, re-read the sheet from it and resolve column roles.
    ///
    /// Roles are resolved from the titles the first data row fills in, so a
    /// column left blank there is not read for any row.
    pub fn analyze(sheet: &Sheet) -> Extraction {
        let header = detect_header_row(sheet.raw_rows());
        let parsed = sheet.rows_from(header.row);
        let roles = ColumnRoles::resolve(&parsed.first_row_titles());
        Extraction {
            header,
            parsed,
            roles,
        }
    }

    pub fn projects(&self, department: &str) -> Vec<ProjectRecord> {
        flatten_rows(&self.parsed.rows, &self.roles, department)
    }
}

/// Extract project records from a sheet, labelling them with `department`.
///
/// A sheet with no data rows below its header yields no records.
pub fn extract_from_sheet(sheet: &Sheet, department: &str) -> Vec<ProjectRecord> {
    let extraction = Extraction::analyze(sheet);
    if extraction.parsed.rows.is_empty() {
        return Vec::new();
    }
    extraction.projects(department)
}
