use dioxus::prelude::*;

use crate::components::{DeadlineChip, EditDeadlineDialog};
use crate::core::dates;
use crate::core::deadline::classify_deadline;
use crate::data::{Priority, Task, TaskFilter, TaskStatus};
use crate::state::use_app_state;
use crate::t;

const ALL: &str = "all";

#[component]
pub fn Tasks() -> Element {
    let state = use_app_state();
    let mut tasks = state.tasks;

    let mut filter = use_signal(TaskFilter::default);
    let mut editing = use_signal(|| None::<u32>);
    let mut edit_error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);

    let board = tasks.read();
    let projects = board.projects();
    let visible: Vec<Task> = board.filtered(&filter.read()).into_iter().cloned().collect();
    let editing_task: Option<Task> = editing().and_then(|id| board.get(id).cloned());
    drop(board);

    let current = filter();
    let status_value = current.status.map(|s| s.label()).unwrap_or(ALL).to_string();
    let priority_value = current.priority.map(|p| p.label()).unwrap_or(ALL).to_string();
    let project_value = current.project.clone().unwrap_or_else(|| ALL.to_string());

    let on_save = move |raw: String| {
        let Some(id) = editing() else {
            return;
        };
        let outcome = tasks
            .write()
            .update_due_date(id, &raw)
            .map(|task| classify_deadline(task.due_date.as_str(), dates::today()).label);
        match outcome {
            Ok(label) => {
                editing.set(None);
                edit_error.set(None);
                confirmation.set(Some(label));
            }
            Err(err) => {
                tracing::warn!(%err, task = id, "rejected due date");
                edit_error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        section { class: "page page-tasks",
            header { class: "page__header",
                h1 { {t!("tasks-title")} }
            }

            div { class: "filters",
                label { class: "filters__field",
                    span { {t!("tasks-filter-status")} }
                    select {
                        value: "{status_value}",
                        oninput: move |evt| filter.write().status = TaskStatus::from_label(&evt.value()),
                        option { value: ALL, {t!("tasks-filter-all")} }
                        for status in TaskStatus::ALL {
                            option { key: "{status.label()}", value: status.label(), "{status.label()}" }
                        }
                    }
                }
                label { class: "filters__field",
                    span { {t!("tasks-filter-priority")} }
                    select {
                        value: "{priority_value}",
                        oninput: move |evt| filter.write().priority = Priority::from_label(&evt.value()),
                        option { value: ALL, {t!("tasks-filter-all")} }
                        for priority in Priority::ALL {
                            option { key: "{priority.label()}", value: priority.label(), "{priority.label()}" }
                        }
                    }
                }
                label { class: "filters__field",
                    span { {t!("tasks-filter-project")} }
                    select {
                        value: "{project_value}",
                        oninput: move |evt| {
                            let value = evt.value();
                            filter.write().project = (value != ALL).then_some(value);
                        },
                        option { value: ALL, {t!("tasks-filter-all")} }
                        for project in projects {
                            option { key: "{project}", value: "{project}", "{project}" }
                        }
                    }
                }
            }

            if visible.is_empty() {
                p { class: "card__placeholder", {t!("tasks-empty")} }
            } else {
                table { class: "task-table",
                    thead {
                        tr {
                            th { {t!("tasks-col-task")} }
                            th { {t!("tasks-col-assignee")} }
                            th { {t!("tasks-col-due")} }
                            th { {t!("tasks-col-priority")} }
                            th { {t!("tasks-col-status")} }
                            th { {t!("tasks-col-progress")} }
                        }
                    }
                    tbody {
                        for task in visible {
                            TaskRow {
                                key: "{task.id}",
                                task: task.clone(),
                                on_edit: move |id| {
                                    edit_error.set(None);
                                    editing.set(Some(id));
                                },
                            }
                        }
                    }
                }
            }

            if let Some(task) = editing_task {
                EditDeadlineDialog {
                    key: "{task.id}",
                    subject: task.title.clone(),
                    initial: task.due_date.clone(),
                    error: edit_error(),
                    on_cancel: move |_| {
                        editing.set(None);
                        edit_error.set(None);
                    },
                    on_save: on_save,
                }
            }

            if let Some(label) = confirmation() {
                div { class: "snackbar", role: "status",
                    span { {t!("deadline-changed", label = label)} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| confirmation.set(None),
                        {t!("dismiss")}
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, on_edit: EventHandler<u32>) -> Element {
    let id = task.id;
    rsx! {
        tr { class: "task-table__row",
            td {
                strong { "{task.title}" }
                div { class: "task-table__project", "{task.project}" }
            }
            td {
                span { class: "avatar", title: "{task.assignee.name}", "{task.assignee.initials}" }
                " {task.assignee.name}"
            }
            td {
                DeadlineChip {
                    due: task.due_date.clone(),
                    on_edit: move |_| on_edit.call(id),
                }
            }
            td {
                span { class: "chip {task.priority.css_class()}", "{task.priority.label()}" }
            }
            td {
                span { class: "chip {task.status.css_class()}", "{task.status.label()}" }
            }
            td {
                div { class: "progress", title: "{task.progress}%",
                    div { class: "progress__bar", style: "width: {task.progress}%;" }
                }
            }
        }
    }
}
