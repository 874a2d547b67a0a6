//! Object storage for uploaded department spreadsheets.
//!
//! - [`ObjectStore`] - List, download and upload objects by `/`-separated path
//! - [`LocalStore`] - A store backed by a directory on disk
//! - [`upload`] - File type checks and object naming for uploads

mod local;
pub mod upload;

pub use local::LocalStore;
pub use upload::UploadReceipt;

use crate::error::{IdeagridError, Result};
use chrono::{DateTime, Utc};

/// An object found by [`ObjectStore::list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectMeta {
    /// File name within the listed folder.
    pub name: String,
    /// Full object path (`folder/name`).
    pub path: String,
    pub created_at: DateTime<Utc>,
    pub size: u64,
}

/// Storage for spreadsheet objects.
pub trait ObjectStore {
    /// Objects directly inside `folder`, newest first, at most `limit`.
    /// A folder that does not exist lists as empty.
    fn list(&self, folder: &str, limit: usize) -> Result<Vec<ObjectMeta>>;

    /// Contents of the object at `path`.
    fn download(&self, path: &str) -> Result<Vec<u8>>;

    /// Store `bytes` at `path`. Never replaces an existing object.
    fn upload(&self, path: &str, bytes: &[u8]) -> Result<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn list(&self, folder: &str, limit: usize) -> Result<Vec<ObjectMeta>> {
        (**self).list(folder, limit)
    }

    fn download(&self, path: &str) -> Result<Vec<u8>> {
        (**self).download(path)
    }

    fn upload(&self, path: &str, bytes: &[u8]) -> Result<()> {
        (**self).upload(path, bytes)
    }
}

/// Split an object path into its segments, rejecting anything that could
/// escape the store root.
pub(crate) fn path_segments(path: &str) -> Result<Vec<&str>> {
    let invalid = || IdeagridError::InvalidObjectPath(path.to_string());

    if path.starts_with('/') || path.contains('\\') || path.contains('\0') {
        return Err(invalid());
    }
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() || segments.iter().any(|s| *s == "." || *s == ".." || s.contains(':')) {
        return Err(invalid());
    }
    Ok(segments)
}

/// Order objects newest first; equal times fall back to name, descending.
pub(crate) fn sort_newest_first(objects: &mut [ObjectMeta]) {
    objects.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.name.cmp(&a.name))
    });
}
