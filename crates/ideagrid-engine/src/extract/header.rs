//! Header row detection.

use super::keywords::{MAX_HEADER_SCORE, header_score};
use crate::sheet::{RawGrid, RawRow};
use tracing::debug;

/// Only this many leading rows are considered as header candidates.
pub const HEADER_SCAN_ROWS: usize = 10;

/// The row chosen as header and how many keyword groups it hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderMatch {
    pub row: usize,
    pub score: u8,
}

/// Find the row most likely to hold column titles.
///
/// Scans the first [`HEADER_SCAN_ROWS`] rows. A row replaces the current best
/// only with a strictly higher score, so the earliest row wins ties. The scan
/// stops at the first row hitting every keyword group. An empty grid gives
/// row 0 with score 0.
pub fn detect_header_row(grid: &RawGrid) -> HeaderMatch {
    let mut best = HeaderMatch::default();

    for (idx, row) in grid.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let score = header_score(&row_text(row));
        if score > best.score {
            best = HeaderMatch { row: idx, score };
        }
        if score >= MAX_HEADER_SCORE {
            break;
        }
    }

    debug!(
        row = best.row,
        score = best.score,
        "header detection: using row {} as header",
        best.row
    );
    best
}

/// All cells of a row joined by single spaces.
fn row_text(row: &RawRow) -> String {
    row.iter()
        .map(|cell| cell.to_display())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|s| CellValue::new_text(s)).collect()
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(detect_header_row(&vec![]), HeaderMatch { row: 0, score: 0 });
    }

    #[test]
    fn test_header_on_first_row() {
        let grid = vec![
            row(&["Supervisor", "Area", "Idea"]),
            row(&["Dr. A", "AI", "Chatbot"]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 0, score: 3 });
    }

    #[test]
    fn test_header_below_title_rows() {
        let grid = vec![
            row(&["x"]),
            row(&["Supervisor", "Research Area", "Idea 1", "Idea 2"]),
            row(&["Dr. A", "AI", "Chatbot", ""]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 1, score: 3 });
    }

    #[test]
    fn test_stops_at_first_full_match() {
        // Row 3 is a full match as well; the earlier one is kept.
        let grid = vec![
            row(&["Department of CS"]),
            row(&["Name", "Domain", "Project"]),
            row(&["Dr. A", "AI", "Chatbot"]),
            row(&["Faculty", "Area", "Title"]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 1, score: 3 });
    }

    #[test]
    fn test_full_match_later_row_after_partial() {
        let grid = vec![
            row(&["Project list"]),
            row(&["Name", "Area"]),
            row(&["Supervisor", "Area", "Idea"]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 2, score: 3 });
    }

    #[test]
    fn test_tie_keeps_earliest_row() {
        let grid = vec![
            row(&["Supervisor", "Area"]),
            row(&["Project", "Domain"]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 0, score: 2 });
    }

    #[test]
    fn test_only_first_ten_rows_scanned() {
        let mut grid: RawGrid = (0..10)
            .map(|i| {
                let label = format!("row {}", i);
                row(&[label.as_str()])
            })
            .collect();
        grid.push(row(&["Supervisor", "Area", "Idea"]));
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 0, score: 0 });
    }

    #[test]
    fn test_best_partial_row_in_scan_window() {
        let grid = vec![
            row(&["notes"]),
            row(&["Faculty"]),
            row(&["Faculty", "Title"]),
            row(&["Dr. A", "Robots"]),
        ];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 2, score: 2 });
    }

    #[test]
    fn test_blank_rows_do_not_stop_scan() {
        let grid = vec![vec![], vec![CellValue::Empty], row(&["Name", "Area", "Idea"])];
        assert_eq!(detect_header_row(&grid), HeaderMatch { row: 2, score: 3 });
    }

    #[test]
    fn test_numbers_join_as_text() {
        let grid = vec![vec![CellValue::Number(1.0), CellValue::new_text("Project")]];
        assert_eq!(row_text(&grid[0]), "1 Project");
        assert_eq!(detect_header_row(&grid).score, 1);
    }
}
