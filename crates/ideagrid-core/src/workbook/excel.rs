//! Excel and OpenDocument decoding via calamine

use crate::error::Result;
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use ideagrid_engine::sheet::{CellValue, RawGrid, Sheet};
use std::io::Cursor;
use tracing::warn;

/// Decode every worksheet of an xlsx/xlsm/xlsb/xls/ods workbook, in workbook order.
pub fn parse_excel(bytes: &[u8]) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        match workbook.worksheet_range(&name) {
            Ok(range) => sheets.push(Sheet::new(&name, range_to_grid(&range))),
            // Chart sheets and other non-worksheet entries have no cell range.
            Err(err) => warn!(sheet = %name, "skipping unreadable sheet: {}", err),
        }
    }

    Ok(sheets)
}

/// Lay a calamine range out in absolute sheet coordinates.
///
/// calamine ranges start at the first used cell, so rows and columns before
/// it are filled with empty cells.
pub(crate) fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let Some((start_row, start_col)) = range.start() else {
        return RawGrid::new();
    };

    let mut grid: RawGrid = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; start_col as usize];
        cells.extend(row.iter().map(data_to_cell));
        grid.push(cells);
    }
    grid
}

/// Convert a calamine cell into a cell value.
/// - Dates stay numeric (Excel serial day number)
/// - Error cells keep their code as text ("#N/A")
pub(crate) fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::new_text(s),
        Data::Int(i) => CellValue::new_number(*i as f64),
        Data::Float(f) => CellValue::new_number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::new_number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::new_text(s),
        Data::Error(e) => CellValue::new_text(&e.to_string()),
    }
}
