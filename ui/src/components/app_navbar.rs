use crate::i18n;
use crate::state::use_app_state;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Shared theme; web links it, desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors.
///
/// `ui` does not know each platform's `Route` enum, so the web and desktop
/// crates register closures that wrap a localized label in their own `Link`:
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" }),
///     // ...
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub tasks: fn(label: &str) -> Element,
    pub projects: fn(label: &str) -> Element,
    pub calendar: fn(label: &str) -> Element,
    pub reports: fn(label: &str) -> Element,
    pub team: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Collapsible sidebar with navigation and the language picker.
///
/// Collapse state and language are [`Preferences`](crate::core::preferences::Preferences)
/// and are persisted on every change.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let state = use_app_state();
    let prefs = state.preferences.read().clone();
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let toggle_state = state.clone();
    let on_toggle = move |_: MouseEvent| {
        toggle_state.update_preferences(|p| p.toggle_sidebar());
    };

    let language_state = state.clone();
    let on_language = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => language_state.update_preferences(|p| p.language = tag),
            Err(err) => tracing::warn!(%err, %tag, "language switch failed"),
        }
    };

    let links: Option<Element> = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let tasks = (b.tasks)(&t!("nav-tasks"));
        let projects = (b.projects)(&t!("nav-projects"));
        let calendar = (b.calendar)(&t!("nav-calendar"));
        let reports = (b.reports)(&t!("nav-reports"));
        let team = (b.team)(&t!("nav-team"));
        rsx! {
            nav { class: "navbar__links",
                {dashboard}
                {tasks}
                {projects}
                {calendar}
                {reports}
                {team}
            }
        }
    });

    let collapsed = prefs.sidebar_collapsed;
    let toggle_label = if collapsed {
        t!("nav-expand")
    } else {
        t!("nav-collapse")
    };
    let toggle_icon = if collapsed { "»" } else { "«" };
    let expanded = (!collapsed).to_string();
    let nav_class = if collapsed {
        "navbar navbar--collapsed"
    } else {
        "navbar"
    };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        aside {
            id: "navbar",
            class: nav_class,
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Volara" }
                    }
                    if !collapsed {
                        span { class: "navbar__brand-subtitle", "{tagline}" }
                    }
                }

                if let Some(nav) = links {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher && !collapsed {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{prefs.language}",
                            oninput: on_language,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == prefs.language,
                                    "{i18n::language_name(&code)}"
                                }
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    title: "{toggle_label}",
                    aria_label: "{toggle_label}",
                    aria_expanded: "{expanded}",
                    onclick: on_toggle,
                    "{toggle_icon}"
                }
            }
        }
    }
}
