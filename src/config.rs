//! Configuration file loading.

use directories::ProjectDirs;
use ideagrid_core::import::DEFAULT_LIST_LIMIT;
use ideagrid_core::store::upload::DEFAULT_DEPARTMENT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const DEFAULT_BUCKET: &str = "project-data";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    store_root: Option<PathBuf>,
    bucket: Option<String>,
    list_limit: Option<usize>,
    default_department: Option<String>,
}

/// Effective settings after applying the config file over the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the buckets.
    pub store_root: PathBuf,
    /// Bucket (subdirectory of `store_root`) for department sheets.
    pub bucket: String,
    pub list_limit: usize,
    pub default_department: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            store_root: default_store_root(),
            bucket: DEFAULT_BUCKET.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            default_department: DEFAULT_DEPARTMENT.to_string(),
        }
    }
}

impl Config {
    /// Directory of the configured bucket.
    pub fn bucket_dir(&self) -> PathBuf {
        self.store_root.join(&self.bucket)
    }

    fn apply(mut self, file: ConfigFile, warnings: &mut Vec<String>) -> Config {
        if let Some(root) = file.store_root {
            self.store_root = root;
        }
        if let Some(bucket) = file.bucket {
            if is_plain_name(&bucket) {
                self.bucket = bucket;
            } else {
                warnings.push(format!("Ignoring invalid bucket name '{}'", bucket));
            }
        }
        match file.list_limit {
            Some(0) => warnings.push("Ignoring list_limit = 0".to_string()),
            Some(limit) => self.list_limit = limit,
            None => {}
        }
        if let Some(department) = file.default_department {
            let department = department.trim();
            if !department.is_empty() {
                self.default_department = department.to_string();
            }
        }
        self
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Load settings from `config_file`, or from the user config dir when none is
/// given. Problems with the file are reported as warnings and defaults are used.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let config = Config::default();
    let path = config_file.cloned().or_else(user_config_path);

    let Some(path) = path else {
        return (config, warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    match read_config_file(&path) {
        Ok(file) => {
            let config = config.apply(file, &mut warnings);
            (config, warnings)
        }
        Err(warning) => {
            warnings.push(warning);
            (config, warnings)
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    toml::from_str::<ConfigFile>(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "ideagrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

fn default_store_root() -> PathBuf {
    match ProjectDirs::from("", "", "ideagrid") {
        Some(proj) => proj.data_dir().join("store"),
        None => PathBuf::from("store"),
    }
}
