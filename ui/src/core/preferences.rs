//! User preferences persisted through the key-value adapter.

use serde::{Deserialize, Serialize};

use super::storage::{self, KeyValueStore};

pub const PREFERENCES_KEY: &str = "preferences";
pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub sidebar_collapsed: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Preferences {
    /// Load stored preferences. Missing or unreadable entries yield defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match storage::read_json::<Preferences>(store, PREFERENCES_KEY) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> storage::Result<()> {
        storage::write_json(store, PREFERENCES_KEY, self)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn saved_toggle_survives_reload() {
        let store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);
        prefs.toggle_sidebar();
        prefs.language = "fr-FR".into();
        prefs.save(&store).unwrap();

        let reloaded = Preferences::load(&store);
        assert!(reloaded.sidebar_collapsed);
        assert_eq!(reloaded.language, "fr-FR");
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let store = MemoryStore::new();
        store
            .write(PREFERENCES_KEY, r#"{"sidebar_collapsed":true}"#)
            .unwrap();
        let prefs = Preferences::load(&store);
        assert!(prefs.sidebar_collapsed);
        assert_eq!(prefs.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn corrupt_documents_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.write(PREFERENCES_KEY, "[]").unwrap();
        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}
