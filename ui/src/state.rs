//! Application state shared through Dioxus context.
//!
//! Platforms call [`use_app_state_provider`] once at the root; views grab the
//! handle with [`use_app_state`]. Only [`Preferences`] is written back to the
//! key-value store, the task board, projects and roster reset on every launch.

use dioxus::prelude::*;

use crate::core::preferences::Preferences;
use crate::core::storage::{KeyValueStore, SharedStore};
use crate::data::{mock, Project, Roster, TaskBoard};
use crate::i18n;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Signal<TaskBoard>,
    pub roster: Signal<Roster>,
    pub projects: Signal<Vec<Project>>,
    pub preferences: Signal<Preferences>,
    store: SharedStore,
}

impl AppState {
    /// Apply `change` to the preferences and persist the result.
    pub fn update_preferences(&self, change: impl FnOnce(&mut Preferences)) {
        let mut preferences = self.preferences;
        preferences.with_mut(change);
        let snapshot = preferences.peek().clone();
        match snapshot.save(self.store.as_ref()) {
            Ok(()) => tracing::debug!(?snapshot, "preferences saved"),
            Err(err) => tracing::warn!(%err, "failed to persist preferences"),
        }
    }
}

/// Create the shared state (preferences loaded from `store`) and provide it.
pub fn use_app_state_provider(store: SharedStore) -> AppState {
    let prefs = use_hook(|| restore_preferences(store.as_ref()));
    let tasks = use_signal(TaskBoard::seeded);
    let roster = use_signal(Roster::seeded);
    let projects = use_signal(mock::seed_projects);
    let preferences = use_signal(move || prefs);

    use_context_provider(|| AppState {
        tasks,
        roster,
        projects,
        preferences,
        store,
    })
}

/// Load preferences and switch the loader to the stored language.
///
/// [`i18n::init`] picks the OS language first; the stored choice always wins
/// so the picker and the rendered strings agree.
pub fn restore_preferences(store: &dyn KeyValueStore) -> Preferences {
    let prefs = Preferences::load(store);
    match i18n::set_language(&prefs.language) {
        Ok(()) => tracing::debug!(language = %prefs.language, "stored language applied"),
        Err(err) => {
            tracing::warn!(%err, language = %prefs.language, "stored language unavailable")
        }
    }
    prefs
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
