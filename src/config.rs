//! Tracker configuration.
//!
//! Configuration is layered: compiled defaults first, then any values
//! present in a JSON document. Missing keys keep their defaults, so an empty
//! object is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use taskwell::config::TrackerConfig;
//! use taskwell::task::view::SortOrder;
//!
//! let config = TrackerConfig::from_json_str(r#"{"view": {"sort": "due_date_descending"}}"#)
//!     .expect("valid configuration");
//! assert_eq!(config.view.sort, SortOrder::DueDateDescending);
//! assert_eq!(config.storage.file_name, "tasks.json");
//! ```

use crate::task::view::{SortOrder, StatusFilter};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the task file inside the data directory.
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// Path of the file inside its directory.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration document is not valid.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Initial view criteria.
    pub view: ViewConfig,
}

impl TrackerConfig {
    /// Parses configuration from a JSON document, filling gaps with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed or a
    /// value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads configuration from `path` inside `dir`.
    ///
    /// A missing file yields the compiled defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read
    /// and [`ConfigError::Parse`] when its contents are invalid.
    pub fn load_from_dir(dir: &Dir, path: &Utf8Path) -> Result<Self, ConfigError> {
        match dir.read_to_string(path) {
            Ok(contents) => Self::from_json_str(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(%path, "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

/// Settings for file-backed persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Name of the task file inside the data directory.
    pub file_name: Utf8PathBuf,
    /// Whether to pretty-print the stored JSON.
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: Utf8PathBuf::from(DEFAULT_TASK_FILE),
            pretty: true,
        }
    }
}

/// Filter and sort criteria a fresh session starts with.
///
/// These are defaults only; the criteria a user picks during a session are
/// never written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Initial status filter.
    pub filter: StatusFilter,
    /// Initial sort order.
    pub sort: SortOrder,
}
