//! ideagrid-core - Workbook decoding, object storage and department imports.

pub mod error;
pub mod extract;
pub mod import;
pub mod store;
pub mod workbook;

pub use error::{IdeagridError, Result};
pub use extract::{extract_projects, extract_projects_from};
pub use import::ProjectImporter;
pub use store::{LocalStore, ObjectMeta, ObjectStore, UploadReceipt};
pub use workbook::Workbook;

pub use ideagrid_engine::extract::ProjectRecord;
