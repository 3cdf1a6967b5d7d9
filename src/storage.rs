//! Preference storage - the durable per-origin key-value store
//!
//! Holds exactly one value: the `preferredLanguage` code. Storage may be
//! unavailable (no config dir, unreadable file); callers treat every error
//! as "no stored value" and carry on.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "preference.json";
const APP_NAME: &str = "langsync";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to access preference file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed preference file: {0}")]
    Format(#[from] serde_json::Error),
}

/// The persisted preference store. One key, no expiry, no versioning.
pub trait PreferenceStore {
    /// The stored language code, if any. The value is returned as-is;
    /// set-membership validation belongs to the caller.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the stored code with a fresh explicit choice.
    fn save(&mut self, code: &str) -> Result<(), StoreError>;
}

/// On-disk preference file layout, keyed like the original store.
#[derive(Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(rename = "preferredLanguage")]
    preferred_language: String,
}

/// JSON-file store under the platform config directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(Self {
            path: dir.join(APP_NAME).join(CONFIG_FILE_NAME),
        })
    }

    /// Store backed by an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: PreferenceFile = serde_json::from_str(&content)?;
        Ok(Some(file.preferred_language))
    }

    fn save(&mut self, code: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = PreferenceFile {
            preferred_language: code.to_string(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    value: Option<String>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
            fail: false,
        }
    }

    /// A store that errors on every access, like persistence being disabled.
    pub fn failing() -> Self {
        Self {
            value: None,
            fail: true,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, code: &str) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        self.value = Some(code.to_string());
        Ok(())
    }
}
