//! Cell values as they come out of a decoded spreadsheet.
//!
//! - [`CellValue`] - The value of a single cell (empty, text, number, or boolean)

use serde::{Deserialize, Serialize};

/// The value stored in a cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Build a text cell. Empty text is stored as [`CellValue::Empty`] so that
    /// every decoder agrees on what a blank cell looks like.
    pub fn new_text(text: &str) -> CellValue {
        if text.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text.to_string())
        }
    }

    pub fn new_number(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Whether the value counts as present when reading a field.
    /// - Empty, `0`, `NaN` and `false` are not
    /// - Any text is, including whitespace-only text
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Bool(b) => *b,
        }
    }

    /// The text of a text cell. Numbers and booleans are not text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it reads in the sheet.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_text_empty_is_empty() {
        assert_eq!(CellValue::new_text(""), CellValue::Empty);
        assert_eq!(CellValue::new_text(" "), CellValue::Text(" ".to_string()));
    }

    #[test]
    fn test_truthiness() {
        assert!(!CellValue::Empty.is_truthy());
        assert!(!CellValue::Number(0.0).is_truthy());
        assert!(!CellValue::Number(f64::NAN).is_truthy());
        assert!(!CellValue::Bool(false).is_truthy());
        assert!(CellValue::Number(-1.5).is_truthy());
        assert!(CellValue::Bool(true).is_truthy());
        assert!(CellValue::Text("  ".to_string()).is_truthy());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(3.0).to_display(), "3");
        assert_eq!(CellValue::Number(2.5).to_display(), "2.5");
        assert_eq!(CellValue::Bool(true).to_display(), "true");
        assert_eq!(CellValue::Empty.to_display(), "");
        assert_eq!(CellValue::new_text("Dr. A").to_display(), "Dr. A");
    }

    #[test]
    fn test_as_text_only_for_text() {
        assert_eq!(CellValue::new_text("x").as_text(), Some("x"));
        assert_eq!(CellValue::Number(1.0).as_text(), None);
        assert_eq!(CellValue::Empty.as_text(), None);
    }
}
