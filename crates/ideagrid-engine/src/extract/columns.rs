//! Column role resolution: which titles hold the supervisor, the area and the ideas.

use super::keywords::{
    AREA_COLUMN, DEFAULT_AREA_KEY, DEFAULT_IDEA_KEY, DEFAULT_SUPERVISOR_KEY, SUPERVISOR_COLUMN,
    SUPERVISOR_FALLBACK, contains_any, is_idea_title,
};
use serde::Serialize;
use tracing::debug;

/// Column titles resolved for each role.
///
/// A role with no matching title falls back to a fixed key that will not
/// normally exist in the sheet, so reads of it come back empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnRoles {
    pub supervisor: String,
    pub area: String,
    /// Never empty; in the order the columns appear.
    pub ideas: Vec<String>,
}

impl ColumnRoles {
    pub fn resolve(titles: &[String]) -> ColumnRoles {
        let supervisor = find_title(titles, SUPERVISOR_COLUMN)
            .or_else(|| find_title(titles, &[SUPERVISOR_FALLBACK]))
            .unwrap_or(DEFAULT_SUPERVISOR_KEY)
            .to_string();

        let area = find_title(titles, AREA_COLUMN)
            .unwrap_or(DEFAULT_AREA_KEY)
            .to_string();

        let mut ideas: Vec<String> = titles
            .iter()
            .filter(|title| is_idea_title(title))
            .cloned()
            .collect();
        if ideas.is_empty() {
            ideas.push(DEFAULT_IDEA_KEY.to_string());
        }

        debug!(
            supervisor = %supervisor,
            area = %area,
            ideas = ?ideas,
            "mapped column roles"
        );

        ColumnRoles {
            supervisor,
            area,
            ideas,
        }
    }
}

/// First title containing any of `words`.
fn find_title<'a>(titles: &'a [String], words: &[&str]) -> Option<&'a str> {
    titles
        .iter()
        .find(|title| contains_any(title, words))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_typical_sheet() {
        let roles = ColumnRoles::resolve(&titles(&[
            "S.No",
            "Supervisor",
            "Research Area",
            "Idea 1",
            "Idea 2",
        ]));
        assert_eq!(roles.supervisor, "Supervisor");
        assert_eq!(roles.area, "Research Area");
        assert_eq!(roles.ideas, vec!["Idea 1", "Idea 2"]);
    }

    #[test]
    fn test_first_matching_title_wins() {
        let roles = ColumnRoles::resolve(&titles(&["Faculty Name", "Supervisor"]));
        assert_eq!(roles.supervisor, "Faculty Name");
    }

    #[test]
    fn test_supervisor_sup_fallback() {
        let roles = ColumnRoles::resolve(&titles(&["Sup.", "Topic"]));
        assert_eq!(roles.supervisor, "Sup.");
    }

    #[test]
    fn test_defaults_when_nothing_matches() {
        let roles = ColumnRoles::resolve(&titles(&["A", "B"]));
        assert_eq!(roles.supervisor, "supervisor");
        assert_eq!(roles.area, "interested_area");
        assert_eq!(roles.ideas, vec!["project_idea"]);
    }

    #[test]
    fn test_defaults_with_no_titles() {
        let roles = ColumnRoles::resolve(&[]);
        assert_eq!(roles.ideas, vec!["project_idea"]);
    }

    #[test]
    fn test_idea_excludes_area_domain_supervisor() {
        let roles = ColumnRoles::resolve(&titles(&[
            "Project Supervisor",
            "Project Area",
            "Project Domain",
            "Project Title",
        ]));
        assert_eq!(roles.supervisor, "Project Supervisor");
        assert_eq!(roles.area, "Project Area");
        assert_eq!(roles.ideas, vec!["Project Title"]);
    }

    #[test]
    fn test_area_keywords() {
        for title in ["Field", "Interests", "Research", "Domain"] {
            let roles = ColumnRoles::resolve(&titles(&[title]));
            assert_eq!(roles.area, title);
        }
    }

    #[test]
    fn test_supervisor_synonyms() {
        for title in ["Teacher", "Faculty", "Name"] {
            let roles = ColumnRoles::resolve(&titles(&[title, "Idea"]));
            assert_eq!(roles.supervisor, title);
        }
    }
}
