use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

pub const KEY_MY_LIST: &str = "mylist";
pub const KEY_LIKES: &str = "likes";
pub const KEY_USER_LIKES: &str = "user_likes";
pub const KEY_NOTIFICATIONS_READ: &str = "notifications_read";

pub fn data_dir() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("local", "rustflix", "rustflix") {
        return dirs.data_dir().to_path_buf();
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(format!("{}/.rustflix", home))
}

/// Key-value mirror over per-key JSON files. The in-memory map is the
/// source of truth for the session; every `set` writes through to disk in
/// the same turn. Any read/write failure (missing file, malformed JSON,
/// unwritable dir) degrades to the default value or to memory-only
/// operation, never to an error.
pub struct Storage {
    dir: Option<PathBuf>,
    cache: HashMap<String, Value>,
}

impl Storage {
    pub fn open(dir: PathBuf) -> Self {
        let _ = fs::create_dir_all(&dir);
        Self {
            dir: Some(dir),
            cache: HashMap::new(),
        }
    }

    pub fn open_default() -> Self {
        Self::open(data_dir())
    }

    /// Memory-only store; used by tests and as the degraded mode when no
    /// data directory is available.
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            cache: HashMap::new(),
        }
    }

    fn key_path(&self, key: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|d| d.join(format!("{}.json", key)))
    }

    /// Read a value, falling back to `T::default()` when the key is
    /// absent or its persisted JSON does not deserialize.
    pub fn get<T: DeserializeOwned + Default>(&mut self, key: &str) -> T {
        if let Some(v) = self.cache.get(key) {
            return serde_json::from_value(v.clone()).unwrap_or_default();
        }
        let Some(path) = self.key_path(key) else {
            return T::default();
        };
        let Ok(s) = fs::read_to_string(&path) else {
            return T::default();
        };
        match serde_json::from_str::<Value>(&s) {
            Ok(v) => {
                let out = serde_json::from_value(v.clone()).unwrap_or_default();
                self.cache.insert(key.to_string(), v);
                out
            }
            Err(e) => {
                warn!("discarding malformed state for key '{}': {}", key, e);
                T::default()
            }
        }
    }

    /// Store a value in the session cache and mirror it to disk. A failed
    /// disk write leaves the in-memory value intact (memory-only for the
    /// rest of the session).
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        let Ok(v) = serde_json::to_value(value) else {
            return;
        };
        self.cache.insert(key.to_string(), v.clone());
        if let Some(path) = self.key_path(key) {
            let body = serde_json::to_string_pretty(&v).unwrap_or_else(|_| "null".to_string());
            if let Err(e) = fs::write(&path, body) {
                warn!("could not mirror key '{}' to {:?}: {}", key, path, e);
            }
        }
    }
}
