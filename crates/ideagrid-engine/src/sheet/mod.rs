//! Sheet model and its two renderings.
//!
//! - [`Sheet`] - A named sheet of rows in absolute coordinates
//! - [`RawGrid`] - Rows of cells with no header assumption
//! - [`ParsedSheet`] / [`ParsedRow`] - Rows keyed by the titles of a header row

mod cell;

pub use cell::{CellValue, format_number};

use std::collections::HashMap;

/// One row of cells, in column order.
pub type RawRow = Vec<CellValue>;

/// Rows of cells, in row order.
pub type RawGrid = Vec<RawRow>;

/// Title given to header cells with no text.
const EMPTY_TITLE: &str = "__EMPTY";

/// A single sheet of a workbook.
///
/// Row 0 is always the first row of the sheet, even when the decoder saw
/// leading blank rows. Rows may have different lengths; missing trailing
/// cells read as empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    rows: RawGrid,
}

impl Sheet {
    pub fn new(name: &str, rows: RawGrid) -> Sheet {
        Sheet {
            name: name.to_string(),
            rows,
        }
    }

    /// Rows as an array of row-arrays, no header assumption.
    pub fn raw_rows(&self) -> &RawGrid {
        &self.rows
    }

    /// Number of columns spanned by the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows as objects keyed by the titles found at `header_row`.
    ///
    /// Only non-empty cells are stored in a row, and rows with no non-empty
    /// cells are skipped entirely.
    pub fn rows_from(&self, header_row: usize) -> ParsedSheet {
        let Some(header) = self.rows.get(header_row) else {
            return ParsedSheet::default();
        };

        let headers = header_titles(header, self.width());
        let rows = self.rows[header_row + 1..]
            .iter()
            .filter_map(|row| {
                let cells: HashMap<String, CellValue> = row
                    .iter()
                    .zip(&headers)
                    .filter(|(value, _)| !value.is_empty())
                    .map(|(value, title)| (title.clone(), value.clone()))
                    .collect();
                if cells.is_empty() {
                    None
                } else {
                    Some(ParsedRow { cells })
                }
            })
            .collect();

        ParsedSheet { headers, rows }
    }
}

/// Build unique column titles from a header row.
/// - Blank cells become `__EMPTY`
/// - Repeats get `_1`, `_2`, ... appended, skipping names already taken
fn header_titles(header: &[CellValue], width: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut titles = Vec::with_capacity(width);

    for col in 0..width {
        let base = match header.get(col) {
            Some(value) if !value.is_empty() => value.to_display(),
            _ => EMPTY_TITLE.to_string(),
        };

        let title = match seen.get(&base).copied() {
            None => {
                seen.insert(base.clone(), 1);
                base
            }
            Some(mut counter) => {
                let mut candidate = format!("{}_{}", base, counter);
                counter += 1;
                while seen.contains_key(&candidate) {
                    candidate = format!("{}_{}", base, counter);
                    counter += 1;
                }
                seen.insert(base, counter);
                seen.insert(candidate.clone(), 1);
                candidate
            }
        };
        titles.push(title);
    }

    titles
}

/// A data row keyed by column title.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedRow {
    cells: HashMap<String, CellValue>,
}

impl ParsedRow {
    /// Value under `title`, if the row has a non-empty cell there.
    pub fn get(&self, title: &str) -> Option<&CellValue> {
        self.cells.get(title)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<const N: usize> From<[(&str, CellValue); N]> for ParsedRow {
    fn from(cells: [(&str, CellValue); N]) -> ParsedRow {
        ParsedRow {
            cells: cells
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(title, value)| (title.to_string(), value))
                .collect(),
        }
    }
}

/// The header titles of a sheet plus the data rows below them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

impl ParsedSheet {
    /// Titles under which the first data row has a value, in column order.
    /// Empty when there are no data rows.
    pub fn first_row_titles(&self) -> Vec<String> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };
        self.headers
            .iter()
            .filter(|title| first.get(title).is_some())
            .cloned()
            .collect()
    }
}
