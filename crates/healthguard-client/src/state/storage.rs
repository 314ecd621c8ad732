//! Local key/value storage
//!
//! Mirrors the browser's `localStorage`: string keys, string values, and
//! persistence across restarts. The file-backed store saves to a JSON file in
//! the user's config directory.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Key under which the session token is stored
pub const TOKEN_KEY: &str = "token";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

type Items = BTreeMap<String, String>;

fn lock(items: &Mutex<Items>) -> MutexGuard<'_, Items> {
    items.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Storage persisted to a JSON object on disk
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<Items>,
}

impl FileStorage {
    /// Default storage file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("healthguard").join("storage.json"))
    }

    /// Open the storage file, starting empty if it is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = Self::load(&path);

        Self {
            path,
            items: Mutex::new(items),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Items {
        if !path.exists() {
            tracing::debug!("Storage file does not exist, starting empty");
            return Items::new();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!("Failed to read storage file: {}", e);
                return Items::new();
            }
        };

        // Non-string values are dropped rather than failing the whole file
        match serde_json::from_str::<BTreeMap<String, Value>>(&contents) {
            Ok(map) => {
                tracing::info!("Loaded storage from {:?}", path);
                map.into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::String(value) => Some((key, value)),
                        _ => None,
                    })
                    .collect()
            }
            Err(e) => {
                tracing::error!("Failed to parse storage file: {}", e);
                Items::new()
            }
        }
    }

    fn save(&self, items: &Items) -> Result<(), StorageError> {
        write_json(&self.path, items)?;
        tracing::debug!("Saved storage to {:?}", self.path);
        Ok(())
    }
}

/// Write `value` as pretty JSON, creating parent directories as needed
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let io_error = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(io_error)
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = lock(&self.items);
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = lock(&self.items);
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.save(&items)
    }
}

/// Storage that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<Items>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        lock(&self.items).remove(key);
        Ok(())
    }
}
