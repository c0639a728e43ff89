#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::storage;
use ui::state::use_app_state_provider;
use ui::views::{Calendar, Dashboard, Projects, Reports, Tasks, Team};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; the desktop crate ships no assets of its own.

/// Log filter variable, e.g. `VOLARA_LOG=ui=debug`.
const LOG_ENV: &str = "VOLARA_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may already have installed a subscriber; keep whichever came first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Volara desktop");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Volara - v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_tasks(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Tasks {}, "{label}" })
}
fn nav_projects(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Projects {}, "{label}" })
}
fn nav_calendar(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Calendar {}, "{label}" })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Reports {}, "{label}" })
}
fn nav_team(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Team {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        tasks: nav_tasks,
        projects: nav_projects,
        calendar: nav_calendar,
        reports: nav_reports,
        team: nav_team,
    });

    // Preferences live under VOLARA_DATA_DIR or the platform data directory.
    let store = use_hook(storage::default_store);
    let state = use_app_state_provider(store);
    let language = state.preferences.read().language.clone();

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the whole routed subtree remounts on change.
        div { key: "{language}", class: "app-root",
            Router::<Route> {}
        }
    }
}

/// Sidebar plus routed page, wired to the desktop `Route` enum.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        div { class: "app-shell",
            AppNavbar {}
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
