use dioxus::prelude::*;

use crate::components::DeadlineChip;
use crate::data::{filter_projects, Project, ProjectStatus};
use crate::state::use_app_state;
use crate::t;

const ALL: &str = "all";

#[component]
pub fn Projects() -> Element {
    let state = use_app_state();
    let projects = state.projects;

    let mut query = use_signal(String::new);
    let mut status = use_signal(|| None::<ProjectStatus>);

    let visible: Vec<Project> = filter_projects(&projects.read(), &query(), status())
        .into_iter()
        .cloned()
        .collect();
    let status_value = status().map(|s| s.label()).unwrap_or(ALL).to_string();
    let search_placeholder = t!("projects-search");

    rsx! {
        section { class: "page page-projects",
            header { class: "page__header",
                h1 { {t!("projects-title")} }
            }

            div { class: "filters",
                input {
                    class: "filters__search",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    aria_label: "{search_placeholder}",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                label { class: "filters__field",
                    span { {t!("projects-filter-status")} }
                    select {
                        value: "{status_value}",
                        oninput: move |evt| status.set(ProjectStatus::from_label(&evt.value())),
                        option { value: ALL, {t!("tasks-filter-all")} }
                        for option_status in ProjectStatus::ALL {
                            option {
                                key: "{option_status.label()}",
                                value: option_status.label(),
                                "{option_status.label()}"
                            }
                        }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "card__placeholder", {t!("projects-empty")} }
            } else {
                div { class: "project-grid",
                    for project in visible {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let members = t!("projects-members", count = project.members);
    let tasks = t!("projects-tasks", count = project.tasks);
    let progress = t!("projects-progress", percent = project.progress);

    rsx! {
        article { class: "card project-card",
            div { class: "project-card__header",
                h2 { class: "project-card__title", "{project.title}" }
                span { class: "chip {project.status.css_class()}", "{project.status.label()}" }
            }
            p { class: "project-card__description", "{project.description}" }

            if !project.highlights.is_empty() {
                div { class: "project-card__highlights",
                    span { class: "project-card__label", {t!("projects-highlights")} }
                    ul {
                        for highlight in project.highlights.iter() {
                            li { key: "{highlight}", "{highlight}" }
                        }
                    }
                }
            }

            div { class: "project-card__progress",
                span { "{progress}" }
                div { class: "progress", title: "{project.progress}%",
                    div { class: "progress__bar", style: "width: {project.progress}%;" }
                }
            }

            div { class: "project-card__meta",
                DeadlineChip { due: project.due_date.clone() }
                span { class: "chip", "{members}" }
                span { class: "chip", "{tasks}" }
            }

            if project.budget.is_some() || project.sponsors.is_some() {
                dl { class: "project-card__extras",
                    if let Some(budget) = project.budget.clone() {
                        dt { {t!("projects-budget")} }
                        dd { "{budget}" }
                    }
                    if let Some(sponsors) = project.sponsors {
                        dt { {t!("projects-sponsors")} }
                        dd { "{sponsors}" }
                    }
                }
            }
        }
    }
}
