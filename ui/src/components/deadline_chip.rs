use dioxus::prelude::*;

use crate::core::{dates, deadline::classify_deadline};

/// Coloured due-date chip. Clicking it fires `on_edit` when provided.
#[component]
pub fn DeadlineChip(due: String, on_edit: Option<EventHandler<()>>) -> Element {
    let deadline = classify_deadline(due.as_str(), dates::today());
    let palette = deadline.status.palette();
    let label = if deadline.is_known() {
        deadline.label.clone()
    } else {
        due.clone()
    };
    let editable = on_edit.is_some();

    rsx! {
        button {
            r#type: "button",
            class: "deadline-chip {deadline.status.css_class()}",
            style: "background: {palette.background}; color: {palette.foreground};",
            title: "{due}",
            disabled: !editable,
            "data-status": deadline.status.as_str(),
            onclick: move |_| {
                if let Some(handler) = on_edit {
                    handler.call(());
                }
            },
            span { class: "deadline-chip__dot", aria_hidden: "true" }
            "{label}"
        }
    }
}
