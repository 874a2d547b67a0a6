//! Error types for Ideagrid core.

use thiserror::Error;

/// Errors that can occur while decoding, storing or importing sheets
#[derive(Error, Debug)]
pub enum IdeagridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("Workbook has no sheets")]
    NoSheets,

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Department is required")]
    MissingDepartment,

    #[error("Only .xlsx, .xls, and .csv formats are allowed: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid object path: {0}")]
    InvalidObjectPath(String),

    #[error("Object already exists: {0}")]
    AlreadyExists(String),

    #[error("Object not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, IdeagridError>;
