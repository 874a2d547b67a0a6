//! Project extraction from spreadsheet bytes

use crate::error::Result;
use crate::workbook::Workbook;
use ideagrid_engine::extract::{ProjectRecord, extract_from_sheet};
use tracing::debug;

/// Extract project records from the first sheet of a spreadsheet file.
///
/// Decoding failures are returned as errors. A sheet with no data rows
/// gives an empty list.
pub fn extract_projects(bytes: &[u8], department: &str) -> Result<Vec<ProjectRecord>> {
    extract_projects_from(bytes, department, None)
}

/// Like [`extract_projects`], reading the named sheet instead of the first.
pub fn extract_projects_from(
    bytes: &[u8],
    department: &str,
    sheet: Option<&str>,
) -> Result<Vec<ProjectRecord>> {
    let workbook = Workbook::from_bytes(bytes)?;
    let sheet = workbook.select(sheet)?;
    let projects = extract_from_sheet(sheet, department);
    debug!(
        sheet = %sheet.name,
        department,
        count = projects.len(),
        "extracted projects"
    );
    Ok(projects)
}
