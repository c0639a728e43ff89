use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder, THEME_CSS};
use ui::core::storage;
use ui::state::use_app_state_provider;
use ui::views::{Calendar, Dashboard, Projects, Reports, Tasks, Team};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
    #[route("/tasks")]
    Tasks {},
    #[route("/projects")]
    Projects {},
    #[route("/calendar")]
    Calendar {},
    #[route("/reports")]
    Reports {},
    #[route("/team")]
    Team {},
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_tasks(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Tasks {},
        "{label}"
    })
}
fn nav_projects(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Projects {},
        "{label}"
    })
}
fn nav_calendar(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Calendar {},
        "{label}"
    })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Reports {},
        "{label}"
    })
}
fn nav_team(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Team {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            dashboard: nav_dashboard,
            tasks: nav_tasks,
            projects: nav_projects,
            calendar: nav_calendar,
            reports: nav_reports,
            team: nav_team,
        });
    }

    use_hook(|| tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Volara web"));

    let store = use_hook(storage::default_store);
    let state = use_app_state_provider(store);
    let language = state.preferences.read().language.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        // Remount the routed tree when the language changes so every label re-resolves.
        div { key: "{language}", class: "app-root",
            Router::<Route> {}
        }
    }
}

/// Sidebar plus routed page, wired to the web `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        div { class: "app-shell",
            AppNavbar {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
