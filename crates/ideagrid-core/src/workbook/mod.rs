//! Workbook decoding from raw bytes (CSV and Excel/OpenDocument)

mod csv;
mod excel;

pub use csv::parse_csv;
pub use excel::parse_excel;

use crate::error::{IdeagridError, Result};
use ideagrid_engine::sheet::Sheet;
use tracing::debug;

/// Name given to the single sheet of a CSV file.
pub const CSV_SHEET_NAME: &str = "Sheet1";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const CFB_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Container format of a spreadsheet, judged from its leading bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetFormat {
    /// Zip (xlsx, xlsb, ods) or OLE compound file (xls).
    Excel,
    Csv,
}

impl SheetFormat {
    pub fn sniff(bytes: &[u8]) -> SheetFormat {
        if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(CFB_MAGIC) {
            SheetFormat::Excel
        } else {
            SheetFormat::Csv
        }
    }
}

/// A decoded workbook: its sheets in workbook order.
#[derive(Clone, Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Decode a spreadsheet file already loaded into memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Workbook> {
        let format = SheetFormat::sniff(bytes);
        debug!(?format, len = bytes.len(), "decoding workbook");

        let sheets = match format {
            SheetFormat::Excel => parse_excel(bytes)?,
            SheetFormat::Csv => {
                let content = std::str::from_utf8(bytes).map_err(|e| IdeagridError::Csv {
                    line: line_of_offset(bytes, e.valid_up_to()),
                    message: format!("invalid UTF-8: {}", e),
                })?;
                vec![Sheet::new(CSV_SHEET_NAME, parse_csv(content)?)]
            }
        };

        Ok(Workbook { sheets })
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn first_sheet(&self) -> Result<&Sheet> {
        self.sheets.first().ok_or(IdeagridError::NoSheets)
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| IdeagridError::SheetNotFound(name.to_string()))
    }

    /// The named sheet, or the first one when `name` is `None`.
    pub fn select(&self, name: Option<&str>) -> Result<&Sheet> {
        match name {
            Some(name) => self.sheet(name),
            None => self.first_sheet(),
        }
    }
}

fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|b| **b == b'\n').count() + 1
}

/// An xlsx workbook with two sheets:
/// - `Ideas`: a title at B3, the header at B4 and one data row at B5
/// - `Notes`: a single text cell at A1
#[cfg(test)]
pub(crate) fn sample_xlsx() -> Vec<u8> {
    let mut book = rust_xlsxwriter::Workbook::new();

    let ideas = book.add_worksheet();
    ideas.set_name("Ideas").unwrap();
    ideas.write_string(2, 1, "Department of CS").unwrap();
    for (col, title) in ["Supervisor", "Research Area", "Idea 1", "Idea 2"]
        .into_iter()
        .enumerate()
    {
        ideas.write_string(3, 1 + col as u16, title).unwrap();
    }
    ideas.write_string(4, 1, "Dr. A").unwrap();
    ideas.write_string(4, 2, "AI").unwrap();
    ideas.write_string(4, 3, "Chatbot").unwrap();
    ideas.write_number(4, 4, 42.0).unwrap();

    let notes = book.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "Dr. B,ML,Drones").unwrap();

    book.save_to_buffer().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideagrid_engine::sheet::CellValue;

    #[test]
    fn test_sniff_format() {
        assert_eq!(SheetFormat::sniff(b"PK\x03\x04rest"), SheetFormat::Excel);
        assert_eq!(
            SheetFormat::sniff(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1]),
            SheetFormat::Excel
        );
        assert_eq!(SheetFormat::sniff(b"Supervisor,Idea"), SheetFormat::Csv);
        assert_eq!(SheetFormat::sniff(b""), SheetFormat::Csv);
    }

    #[test]
    fn test_csv_workbook_has_one_sheet() {
        let wb = Workbook::from_bytes(b"Supervisor,Idea\nDr. A,Robots\n").unwrap();
        assert_eq!(wb.sheet_names(), vec![CSV_SHEET_NAME]);
        let sheet = wb.first_sheet().unwrap();
        assert_eq!(sheet.raw_rows()[1][0], CellValue::new_text("Dr. A"));
    }

    #[test]
    fn test_empty_csv_is_an_empty_sheet() {
        let wb = Workbook::from_bytes(b"").unwrap();
        assert!(wb.first_sheet().unwrap().raw_rows().is_empty());
    }

    #[test]
    fn test_select_sheet() {
        let wb = Workbook::from_bytes(b"a,b").unwrap();
        assert!(wb.select(None).is_ok());
        assert!(wb.select(Some(CSV_SHEET_NAME)).is_ok());
        assert!(matches!(
            wb.select(Some("Projects")),
            Err(IdeagridError::SheetNotFound(name)) if name == "Projects"
        ));
    }

    #[test]
    fn test_xlsx_workbook_sheets_in_order() {
        let wb = Workbook::from_bytes(&sample_xlsx()).unwrap();
        assert_eq!(wb.sheet_names(), vec!["Ideas", "Notes"]);
        assert_eq!(wb.first_sheet().unwrap().name, "Ideas");
        let notes = wb.select(Some("Notes")).unwrap();
        assert_eq!(notes.raw_rows()[0][0], CellValue::new_text("Dr. B,ML,Drones"));
    }

    #[test]
    fn test_no_sheets() {
        assert!(matches!(
            Workbook::default().first_sheet(),
            Err(IdeagridError::NoSheets)
        ));
    }

    #[test]
    fn test_invalid_utf8_reports_line() {
        let err = Workbook::from_bytes(b"a,b\nc,\xff\xfe").unwrap_err();
        assert!(matches!(err, IdeagridError::Csv { line: 2, .. }));
    }
}
