//! Translations must accept the same Fluent variables as the fallback, or
//! `t!("team-completed", count = n)` silently renders `{$count}` in one locale.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/volara-ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/volara-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/volara-ui.ftl")),
];

/// Message id -> `$variables` referenced by its value. Panics on duplicate ids.
fn messages(locale: &str, src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), variables(value));
        assert!(previous.is_none(), "{locale}: duplicate message `{id}`");
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn fallback_declares_expected_arguments() {
    let fallback = messages("en-US", EN_US);
    assert_eq!(fallback["team-completed"], BTreeSet::from(["count".to_string()]));
    assert_eq!(fallback["deadline-changed"], BTreeSet::from(["label".to_string()]));
    assert!(fallback["nav-dashboard"].is_empty());
}

#[test]
fn every_locale_uses_the_fallback_arguments() {
    let fallback = messages("en-US", EN_US);
    let mut mismatches = Vec::new();

    for (locale, src) in LOCALES {
        let translated = messages(locale, src);
        for (id, expected) in &fallback {
            match translated.get(id) {
                None => mismatches.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != expected => mismatches.push(format!(
                    "{locale}: `{id}` uses {found:?}, expected {expected:?}"
                )),
                Some(_) => {}
            }
        }
    }

    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}
