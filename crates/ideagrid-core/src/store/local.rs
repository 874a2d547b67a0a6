use super::{ObjectMeta, ObjectStore, path_segments, sort_newest_first};
use crate::error::{IdeagridError, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Object store backed by a directory. Object `a/b.csv` lives at `<root>/a/b.csv`.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> LocalStore {
        LocalStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let mut full = self.root.clone();
        full.extend(path_segments(path)?);
        Ok(full)
    }
}

impl ObjectStore for LocalStore {
    fn list(&self, folder: &str, limit: usize) -> Result<Vec<ObjectMeta>> {
        let dir = self.resolve(folder)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut objects = Vec::new();
        for entry in entries {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            // Some filesystems do not record creation time.
            let created = meta.created().or_else(|_| meta.modified())?;
            objects.push(ObjectMeta {
                path: format!("{}/{}", folder.trim_end_matches('/'), name),
                name,
                created_at: DateTime::<Utc>::from(created),
                size: meta.len(),
            });
        }

        sort_newest_first(&mut objects);
        objects.truncate(limit);
        debug!(folder, count = objects.len(), "listed objects");
        Ok(objects)
    }

    fn download(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path)?;
        fs::read(&full).map_err(|err| match err.kind() {
            ErrorKind::NotFound => IdeagridError::NotFound(path.to_string()),
            _ => IdeagridError::Io(err),
        })
    }

    fn upload(&self, path: &str, bytes: &[u8]) -> Result<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => IdeagridError::AlreadyExists(path.to_string()),
                _ => IdeagridError::Io(err),
            })?;
        file.write_all(bytes)?;
        debug!(path, len = bytes.len(), "stored object");
        Ok(())
    }
}
