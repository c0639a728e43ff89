//! Every `t!("key")` used in `src/` must exist in the fallback bundle, and
//! every locale folder must define the fallback's full key set.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "volara-ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK: &str = "en-US";

/// Message ids defined in a Fluent file. Terms (`-term`) and attributes are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(...)` in one source file.
fn keys_in_source(content: &str, found: &mut BTreeSet<String>) {
    let needle = "t!(\"";
    let mut rest = content;
    while let Some(pos) = rest.find(needle) {
        // `format!("...")` also ends in `t!(`; only a standalone `t!` counts.
        let standalone = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        let after = &rest[pos + needle.len()..];
        if standalone {
            if let Some(end) = after.find('"') {
                let key = &after[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
        rest = after;
    }
}

fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                keys_in_source(&content, &mut found);
            }
        }
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("fallback FTL file should be readable");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(!fallback_keys.is_empty(), "no keys parsed from {fallback_file:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("nav-dashboard"), "source scan found nothing");

    let missing: Vec<&String> = referenced
        .iter()
        .filter(|key| !fallback_keys.contains(*key))
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}: {missing:?}"
    );

    let mut gaps: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("locale {locale} has no {FTL_FILENAME}: {err}"));
        let keys = parse_ftl_keys(&content);
        let absent: Vec<String> = fallback_keys.difference(&keys).cloned().collect();
        if !absent.is_empty() {
            gaps.insert(locale, absent);
        }
    }
    assert!(gaps.is_empty(), "locales missing fallback keys: {gaps:#?}");

    let unused: Vec<&String> = fallback_keys.difference(&referenced).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: {} fallback keys unused in src/: {unused:?}", unused.len());
    }
}

#[test]
fn source_scan_ignores_format_macros() {
    let mut found = BTreeSet::new();
    keys_in_source(
        r#"let a = t!("nav-team"); let b = format!("not-a-key"); let c = t!("team-ongoing", count = 2);"#,
        &mut found,
    );
    let found: Vec<&str> = found.iter().map(String::as_str).collect();
    assert_eq!(found, ["nav-team", "team-ongoing"]);
}
