//! Upload checks and object naming.

use crate::error::{IdeagridError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Department folder used when an upload names none.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// File extensions accepted for upload (lowercase, with dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &[".xlsx", ".xls", ".csv"];

/// Content types accepted for upload. `text/plain` covers CSV sent by
/// clients that label it loosely.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "text/csv",
    "application/csv",
    "text/plain",
];

/// Where an upload ended up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    /// Full object path, `{department}/{millis}_{file name}`.
    pub path: String,
    pub department: String,
    /// Sanitized file name as stored.
    pub file_name: String,
}

/// Accept a file if either its extension or its content type is a spreadsheet.
pub fn check_file_type(file_name: &str, content_type: Option<&str>) -> Result<()> {
    let by_type = content_type.is_some_and(|ct| {
        let ct = ct.trim().to_ascii_lowercase();
        ALLOWED_CONTENT_TYPES.contains(&ct.as_str())
    });
    let by_extension = extension(file_name)
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

    if by_type || by_extension {
        Ok(())
    } else {
        Err(IdeagridError::UnsupportedFileType(file_name.to_string()))
    }
}

/// Extension including the dot, from the last `.` in the name.
fn extension(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_file_name(file_name: &str) -> String {
    unsafe_chars_re().replace_all(file_name, "_").into_owned()
}

fn unsafe_chars_re() -> &'static Regex {
    static UNSAFE_RE: OnceLock<Regex> = OnceLock::new();
    UNSAFE_RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9.\-]").expect("file name regex must compile"))
}

/// The department folder for an upload, defaulting to [`DEFAULT_DEPARTMENT`].
pub fn department_folder(department: Option<&str>) -> &str {
    department
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DEPARTMENT)
}

/// Object path for a new upload, unique per millisecond.
pub fn object_path(department: &str, file_name: &str, at: DateTime<Utc>) -> UploadReceipt {
    let file_name = sanitize_file_name(file_name);
    UploadReceipt {
        path: format!("{}/{}_{}", department, at.timestamp_millis(), file_name),
        department: department.to_string(),
        file_name,
    }
}
