//! ideagrid_engine - Project idea extraction from department spreadsheets.

pub mod extract;
pub mod sheet;

pub use extract::{ProjectRecord, extract_from_sheet};
pub use sheet::{CellValue, Sheet};
