//! Local persistence adapters for small pieces of UI state.
//!
//! Only preferences go through here; the task board and rosters are in-memory
//! for the lifetime of the app. Backends:
//! - `MemoryStore`: tests and the fallback when nothing else is available.
//! - `FileStore`: desktop, one JSON file per key under the data directory.
//! - `LocalStorageStore`: web, `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Environment variable overriding the desktop data directory.
pub const DATA_DIR_ENV: &str = "VOLARA_DATA_DIR";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Minimal string key-value contract every backend implements.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Shared handle handed out through context.
pub type SharedStore = Rc<dyn KeyValueStore>;

pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::{data_dir, FileStore};

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{validate_key, KeyValueStore, Result, StorageError, DATA_DIR_ENV};

    /// `$VOLARA_DATA_DIR` when set, else the platform data directory.
    pub fn data_dir() -> Result<PathBuf> {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => directories::ProjectDirs::from("com", "Volara", "Volara")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    StorageError::Unavailable("unable to determine data directory".into())
                }),
        }
    }

    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `<data dir>/state`, see [`data_dir`].
        pub fn from_env() -> Result<Self> {
            Ok(Self::new(data_dir()?.join("state")))
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            self.dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueStore for FileStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            validate_key(key)?;
            match fs::read_to_string(self.path_for(key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            validate_key(key)?;
            fs::create_dir_all(&self.dir)?;
            let target = self.path_for(key);
            let staging = target.with_extension("json.tmp");
            fs::write(&staging, value)?;
            fs::rename(&staging, &target)?;
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            validate_key(key)?;
            match fs::remove_file(self.path_for(key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::{validate_key, KeyValueStore, Result, StorageError};

    const PREFIX: &str = "volara.";

    #[derive(Debug, Clone, Default)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        fn storage(&self) -> Result<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| StorageError::Unavailable("localStorage unavailable".into()))
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            validate_key(key)?;
            self.storage()?
                .get_item(&format!("{PREFIX}{key}"))
                .map_err(|_| StorageError::Unavailable("localStorage read failed".into()))
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            validate_key(key)?;
            self.storage()?
                .set_item(&format!("{PREFIX}{key}"), value)
                .map_err(|_| StorageError::Unavailable("localStorage write failed".into()))
        }

        fn remove(&self, key: &str) -> Result<()> {
            validate_key(key)?;
            self.storage()?
                .remove_item(&format!("{PREFIX}{key}"))
                .map_err(|_| StorageError::Unavailable("localStorage remove failed".into()))
        }
    }
}

/// Best backend for the current platform, falling back to memory.
pub fn default_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::from_env() {
            Ok(store) => {
                tracing::debug!(dir = %store.dir().display(), "using file-backed state store");
                Rc::new(store)
            }
            Err(err) => {
                tracing::warn!(%err, "falling back to in-memory state store");
                Rc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        count: u32,
    }

    #[test]
    fn memory_store_round_trips_json() {
        let store = MemoryStore::new();
        assert_eq!(read_json::<Probe>(&store, "probe").unwrap(), None);
        write_json(&store, "probe", &Probe { count: 3 }).unwrap();
        assert_eq!(
            read_json::<Probe>(&store, "probe").unwrap(),
            Some(Probe { count: 3 })
        );
        store.remove("probe").unwrap();
        assert_eq!(store.read("probe").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.read(""), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn corrupt_json_surfaces_as_serialization_error() {
        let store = MemoryStore::new();
        store.write("probe", "{not json").unwrap();
        assert!(matches!(
            read_json::<Probe>(&store, "probe"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_between_handles() {
        let dir = std::env::temp_dir().join(format!(
            "volara-store-test-{}-{}",
            std::process::id(),
            line!()
        ));
        let first = FileStore::new(&dir);
        assert_eq!(first.read("prefs").unwrap(), None);
        first.write("prefs", "{\"count\":1}").unwrap();

        let second = FileStore::new(&dir);
        assert_eq!(second.read("prefs").unwrap().as_deref(), Some("{\"count\":1}"));
        second.remove("prefs").unwrap();
        second.remove("prefs").unwrap();
        assert_eq!(first.read("prefs").unwrap(), None);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
