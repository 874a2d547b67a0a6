//! Keyword tables used to recognise header rows and column roles.
//!
//! Matching is a plain case-insensitive substring test: `"search"` matches
//! `"Research Area"`, `"name"` matches `"Username"`.

/// Header row scoring: words naming the supervisor column.
pub const HEADER_SUPERVISOR: &[&str] = &["supervisor", "name", "faculty"];
/// Header row scoring: words naming the area column.
pub const HEADER_AREA: &[&str] = &["area", "search", "domain"];
/// Header row scoring: words naming an idea column.
pub const HEADER_IDEA: &[&str] = &["idea", "project", "title"];

/// All header scoring groups. A row scores one point per group it hits.
pub const HEADER_GROUPS: &[&[&str]] = &[HEADER_SUPERVISOR, HEADER_AREA, HEADER_IDEA];

/// Highest possible header score.
pub const MAX_HEADER_SCORE: u8 = HEADER_GROUPS.len() as u8;

pub const SUPERVISOR_COLUMN: &[&str] = &["supervisor", "name", "faculty", "teacher"];
/// Second pass for the supervisor column when nothing in [`SUPERVISOR_COLUMN`] hits.
pub const SUPERVISOR_FALLBACK: &str = "sup";
pub const AREA_COLUMN: &[&str] = &["area", "domain", "field", "interest", "research"];
pub const IDEA_COLUMN: &[&str] = &["idea", "project", "title"];
/// Words that disqualify a title from being an idea column ("Project Area").
pub const IDEA_EXCLUDE: &[&str] = &["area", "domain", "supervisor"];

/// Keys used when a role has no matching column.
pub const DEFAULT_SUPERVISOR_KEY: &str = "supervisor";
pub const DEFAULT_AREA_KEY: &str = "interested_area";
pub const DEFAULT_IDEA_KEY: &str = "project_idea";

/// True if `text` contains any of `words`, ignoring case.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words.iter().any(|word| lower.contains(&word.to_lowercase()))
}

/// Number of header groups hit by `text` (0 to [`MAX_HEADER_SCORE`]).
pub fn header_score(text: &str) -> u8 {
    let lower = text.to_lowercase();
    HEADER_GROUPS
        .iter()
        .filter(|group| group.iter().any(|word| lower.contains(*word)))
        .count() as u8
}

/// True if `title` looks like a free-text idea column.
pub fn is_idea_title(title: &str) -> bool {
    contains_any(title, IDEA_COLUMN) && !contains_any(title, IDEA_EXCLUDE)
}
