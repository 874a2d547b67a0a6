//! Department imports: upload a sheet, then read projects from the newest one.

use crate::error::{IdeagridError, Result};
use crate::extract::extract_projects;
use crate::store::upload::{self, UploadReceipt};
use crate::store::ObjectStore;
use chrono::Utc;
use ideagrid_engine::extract::ProjectRecord;
use tracing::info;

/// How many objects to look at when finding a department's newest sheet.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Stores department spreadsheets and lists the projects in the latest one.
pub struct ProjectImporter<S> {
    store: S,
    list_limit: usize,
}

impl<S: ObjectStore> ProjectImporter<S> {
    pub fn new(store: S) -> ProjectImporter<S> {
        ProjectImporter {
            store,
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub fn with_list_limit(mut self, limit: usize) -> ProjectImporter<S> {
        self.list_limit = limit.max(1);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store an uploaded spreadsheet under its department folder.
    pub fn upload(
        &self,
        department: Option<&str>,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<UploadReceipt> {
        upload::check_file_type(file_name, content_type)?;

        let department = upload::department_folder(department);
        let receipt = upload::object_path(department, file_name, Utc::now());
        self.store.upload(&receipt.path, bytes)?;

        info!(path = %receipt.path, len = bytes.len(), "uploaded department sheet");
        Ok(receipt)
    }

    /// Projects from the department's most recently uploaded spreadsheet.
    ///
    /// A department with no uploads yet has no projects; that is not an error.
    pub fn projects(&self, department: &str) -> Result<Vec<ProjectRecord>> {
        let department = department.trim();
        if department.is_empty() {
            return Err(IdeagridError::MissingDepartment);
        }

        info!(department, "fetching projects");
        let files = self.store.list(department, self.list_limit)?;
        let Some(latest) = files.first() else {
            info!(department, "no files found for department");
            return Ok(Vec::new());
        };

        info!(path = %latest.path, "processing latest file");
        let bytes = self.store.download(&latest.path)?;
        extract_projects(&bytes, department)
    }
}
