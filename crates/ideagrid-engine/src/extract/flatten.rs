//! Row flattening: one record per filled idea cell.

use super::columns::ColumnRoles;
use crate::sheet::{CellValue, ParsedRow};
use serde::{Deserialize, Serialize};

/// Supervisor shown when the row has no value under the supervisor column.
pub const UNKNOWN_SUPERVISOR: &str = "Unknown Faculty";
/// Area shown when the row has no value under the area column.
pub const UNKNOWN_AREA: &str = "General Area";

/// A single project idea offered by a supervisor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// `{department}-{row}-{idea column}`, unique within one import.
    pub id: String,
    pub supervisor: String,
    pub interested_area: String,
    pub project_idea: String,
    pub department: String,
}

/// Turn parsed rows into project records, in row order and then idea column order.
///
/// Idea cells that are not text, or are blank after trimming, are skipped.
pub fn flatten_rows(rows: &[ParsedRow], roles: &ColumnRoles, department: &str) -> Vec<ProjectRecord> {
    let mut projects = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let supervisor = field_or(row, &roles.supervisor, UNKNOWN_SUPERVISOR);
        let area = field_or(row, &roles.area, UNKNOWN_AREA);

        for (idea_idx, key) in roles.ideas.iter().enumerate() {
            let Some(idea) = row.get(key).and_then(CellValue::as_text) else {
                continue;
            };
            let idea = idea.trim();
            if idea.is_empty() {
                continue;
            }
            projects.push(ProjectRecord {
                id: format!("{}-{}-{}", department, row_idx, idea_idx),
                supervisor: supervisor.clone(),
                interested_area: area.clone(),
                project_idea: idea.to_string(),
                department: department.to_string(),
            });
        }
    }

    projects
}

fn field_or(row: &ParsedRow, key: &str, default: &str) -> String {
    match row.get(key) {
        Some(value) if value.is_truthy() => value.to_display(),
        _ => default.to_string(),
    }
}
