//! Localization for `volara-ui`.
//!
//! Fluent bundles live under `i18n/<locale>/volara-ui.ftl` and are embedded at
//! compile time with `rust-embed`; `i18n-embed` picks the best match for the
//! OS (desktop) or `navigator.languages` (web). `en-US` is the fallback and the
//! reference every other locale is checked against in `tests/`.
//!
//! Call [`init`] once at startup, then look strings up with [`t!`]:
//! ```ignore
//! ui::i18n::init();
//! let label = ui::t!("nav-dashboard");
//! ```
//!
//! Deadline chip labels ("Due in 5 days") are not routed through here; they
//! are fixed English strings produced by the deadline classifier.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Short lookup through the shared [`LOADER`]; accepts named Fluent arguments.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; must match the FTL file name.
const DOMAIN: &str = "volara-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

/// Load bundles for the requested system languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization loaded"),
            Err(err) => tracing::warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language the loader currently resolves strings in.
pub fn current_language() -> String {
    use i18n_embed::LanguageLoader;

    LOADER
        .current_languages()
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Embedded locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Native display name for the language picker.
pub fn language_name(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        other => other,
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_locales_are_discoverable() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn unknown_language_keeps_current_strings() {
        init();
        let before = fl!(&*LOADER, "nav-team");
        let _ = set_language("zz-ZZ");
        let _ = set_language("not a tag");
        let after = fl!(&*LOADER, "nav-team");
        assert_eq!(before, after);
    }

    #[test]
    fn picker_names_fall_back_to_tag() {
        assert_eq!(language_name("fr-FR"), "Français");
        assert_eq!(language_name("de-DE"), "de-DE");
    }
}
