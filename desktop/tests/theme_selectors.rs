#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Components in `ui` reference these classes directly. A plain substring check
against the shared theme catches renames that would otherwise only show up as
unstyled markup in the packaged app. When a selector is renamed on purpose,
update the markup and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app-shell",
    ".page {",
    ".page__header",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".segmented__item--active",
    ".card {",
    ".card__placeholder",
    // Charts
    ".chart__svg",
    ".chart__grid",
    ".chart__line",
    ".chart__marker",
    ".chart__bar",
    ".chart__wedge",
    ".chart__callout",
    ".chart__tooltip",
    ".chart__tooltip-swatch",
    // Chips
    ".chip--priority-high",
    ".chip--status-progress",
    ".deadline-chip {",
    ".deadline-chip--overdue",
    ".deadline-chip--soon",
    ".deadline-chip--normal",
    // Tables, dialog & feedback
    ".task-table",
    ".team-table",
    ".member-card__header",
    // Projects & calendar
    ".project-grid",
    ".project-card__header",
    ".chip--status-planning",
    ".filters__search",
    ".calendar__grid",
    ".calendar__cell--today",
    ".calendar__cell--selected",
    ".calendar-event--milestone",
    ".dialog-backdrop",
    ".dialog__error",
    ".snackbar",
    ".export__status--error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn every_deadline_status_has_a_modifier() {
    for status in ["overdue", "soon", "normal"] {
        let selector = format!(".deadline-chip--{status}");
        assert!(THEME_CSS.contains(&selector), "{selector} missing");
    }
}
