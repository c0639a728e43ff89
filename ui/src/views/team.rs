use dioxus::prelude::*;

use crate::components::{DeadlineChip, EditDeadlineDialog};
use crate::core::dates;
use crate::core::deadline::classify_deadline;
use crate::data::Member;
use crate::state::use_app_state;
use crate::t;

#[component]
pub fn Team() -> Element {
    let state = use_app_state();
    let mut roster = state.roster;

    let mut editing = use_signal(|| None::<u32>);
    let mut edit_error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);

    let members: Vec<Member> = roster.read().members().to_vec();
    let editing_member: Option<Member> =
        editing().and_then(|id| members.iter().find(|member| member.id == id).cloned());

    let on_save = move |raw: String| {
        let Some(id) = editing() else {
            return;
        };
        let outcome = roster
            .write()
            .update_deadline(id, &raw)
            .map(|member| classify_deadline(member.deadline.as_str(), dates::today()).label);
        match outcome {
            Ok(label) => {
                editing.set(None);
                edit_error.set(None);
                confirmation.set(Some(label));
            }
            Err(err) => {
                tracing::warn!(%err, member = id, "rejected member deadline");
                edit_error.set(Some(err.to_string()));
            }
        }
    };

    rsx! {
        section { class: "page page-team",
            header { class: "page__header",
                h1 { {t!("team-title")} }
            }

            div { class: "team-grid",
                for member in members {
                    MemberCard {
                        key: "{member.id}",
                        member: member.clone(),
                        on_edit: move |id| {
                            edit_error.set(None);
                            editing.set(Some(id));
                        },
                    }
                }
            }

            if let Some(member) = editing_member {
                EditDeadlineDialog {
                    key: "{member.id}",
                    subject: member.name.clone(),
                    initial: member.deadline.clone(),
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
fn MemberCard(member: Member, on_edit: EventHandler<u32>) -> Element {
    let id = member.id;
    let completed = t!("team-completed", count = member.tasks_completed);
    let ongoing = t!("team-ongoing", count = member.tasks_ongoing);

    rsx! {
        article { class: "card member-card",
            div { class: "member-card__header",
                span { class: "avatar avatar--large", "{member.avatar}" }
                div {
                    h2 { class: "member-card__name", "{member.name}" }
                    div { class: "member-card__role", "{member.role}" }
                    a { class: "member-card__email", href: "mailto:{member.email}", "{member.email}" }
                }
            }

            div { class: "member-card__performance",
                span { {t!("team-performance")} }
                div { class: "progress", title: "{member.performance}%",
                    div { class: "progress__bar", style: "width: {member.performance}%;" }
                }
                span { "{member.performance}%" }
            }

            div { class: "member-card__stats",
                span { class: "chip chip--status-completed", "{completed}" }
                span { class: "chip chip--status-progress", "{ongoing}" }
            }

            div { class: "member-card__projects",
                for project in member.projects.iter() {
                    span { key: "{project}", class: "chip", "{project}" }
                }
            }

            DeadlineChip {
                due: member.deadline.clone(),
                on_edit: move |_| on_edit.call(id),
            }
        }
    }
}
