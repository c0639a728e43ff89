//! Startup restores the stored preferences, including the language choice,
//! over whatever the OS locale selected.

use ui::core::preferences::{Preferences, DEFAULT_LANGUAGE};
use ui::core::storage::{KeyValueStore, MemoryStore};
use ui::i18n;
use ui::state::restore_preferences;

// One test: the loader is process-global and tests run in parallel.
#[test]
fn stored_language_always_wins_over_the_current_one() {
    i18n::init();

    // A French session whose user switched back to English.
    i18n::set_language("fr-FR").expect("fr-FR is bundled");
    assert_eq!(i18n::current_language(), "fr-FR");
    let store = MemoryStore::new();
    let english = Preferences {
        sidebar_collapsed: true,
        language: DEFAULT_LANGUAGE.to_string(),
    };
    english.save(&store).expect("memory store accepts writes");

    let restored = restore_preferences(&store);
    assert_eq!(restored, english);
    assert_eq!(i18n::current_language(), DEFAULT_LANGUAGE);
    assert_eq!(ui::t!("nav-team"), "Team");

    // First launch: nothing stored, so the default language is applied too.
    i18n::set_language("es-ES").expect("es-ES is bundled");
    let empty = MemoryStore::new();
    assert_eq!(restore_preferences(&empty), Preferences::default());
    assert_eq!(i18n::current_language(), DEFAULT_LANGUAGE);

    // Non-default choices are applied as well.
    empty
        .write("preferences", r#"{"language":"fr-FR"}"#)
        .expect("memory store accepts writes");
    assert_eq!(restore_preferences(&empty).language, "fr-FR");
    assert_eq!(i18n::current_language(), "fr-FR");
}
