use dioxus::prelude::*;

use crate::charts::{ChartCanvas, ChartMode};
use crate::components::DeadlineChip;
use crate::core::{dates, format};
use crate::data::{mock, Task};
use crate::state::use_app_state;
use crate::t;

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let state = use_app_state();
    let today = dates::today();
    let mut mode = use_signal(|| ChartMode::Line);
    let series = use_hook(mock::work_overview);

    let upcoming: Vec<Task> = state
        .tasks
        .read()
        .upcoming(UPCOMING_LIMIT)
        .into_iter()
        .cloned()
        .collect();

    let tiles: Vec<(String, String, String)> = series
        .iter()
        .map(|s| {
            let title = match s.name.as_str() {
                "Productive" => t!("dashboard-productive"),
                "Completion" => t!("dashboard-completion"),
                other => other.to_string(),
            };
            let value = s.average().map(format::format_percent).unwrap_or_default();
            (title, value, s.color.clone())
        })
        .collect();

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page__header",
                h1 { {t!("dashboard-title")} }
                span { class: "page__meta", "{format::format_long_date(today)}" }
            }

            div { class: "card card--overview",
                div { class: "card__header",
                    h2 { {t!("dashboard-overview")} }
                    ModeToggle { mode: mode(), on_change: move |next| mode.set(next) }
                }
                ChartCanvas { key: "{mode().label()}", series: series.clone(), mode: mode() }
                div { class: "stat-tiles",
                    for (title, value, color) in tiles {
                        div { class: "stat-tile", key: "{title}",
                            span { class: "stat-tile__label", style: "color: {color};", "{title}" }
                            strong { class: "stat-tile__value", "{value}" }
                        }
                    }
                }
            }

            div { class: "dashboard-grid",
                div { class: "card",
                    h2 { {t!("dashboard-breakdown")} }
                    ChartCanvas { series: series.clone(), mode: ChartMode::Pie }
                }
                UpcomingList { tasks: upcoming }
            }
        }
    }
}

#[component]
fn ModeToggle(mode: ChartMode, on_change: EventHandler<ChartMode>) -> Element {
    let options = [
        (ChartMode::Line, t!("chart-mode-line")),
        (ChartMode::Bar, t!("chart-mode-bar")),
    ];
    rsx! {
        div { class: "segmented", role: "group",
            for (option, label) in options {
                {
                    let active = option == mode;
                    let class = if active {
                        "segmented__item segmented__item--active"
                    } else {
                        "segmented__item"
                    };
                    rsx! {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            class,
                            aria_pressed: "{active}",
                            onclick: move |_| on_change.call(option),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingList(tasks: Vec<Task>) -> Element {
    rsx! {
        div { class: "card card--upcoming",
            h2 { {t!("dashboard-upcoming")} }
            if tasks.is_empty() {
                p { class: "card__placeholder", {t!("dashboard-no-upcoming")} }
            } else {
                ul { class: "upcoming",
                    for task in tasks {
                        li { class: "upcoming__item", key: "{task.id}",
                            span { class: "avatar", title: "{task.assignee.name}", "{task.assignee.initials}" }
                            div { class: "upcoming__body",
                                strong { "{task.title}" }
                                span { class: "upcoming__project", "{task.project}" }
                            }
                            DeadlineChip { due: task.due_date.clone() }
                        }
                    }
                }
            }
        }
    }
}
