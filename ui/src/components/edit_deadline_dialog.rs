use dioxus::prelude::*;

use crate::t;

/// Modal date picker. Key it by the edited record so the draft resets.
///
/// `on_save` receives the raw `YYYY-MM-DD` value from the date input; the
/// caller validates it and passes any failure back through `error`.
#[component]
pub fn EditDeadlineDialog(
    subject: String,
    initial: String,
    error: Option<String>,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());

    rsx! {
        div { class: "dialog-backdrop", onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "dialog__title", {t!("dialog-edit-title")} }
                p { class: "dialog__subject", "{subject}" }
                label { class: "dialog__field",
                    span { {t!("dialog-date-label")} }
                    input {
                        r#type: "date",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                }
                if let Some(message) = error {
                    p { class: "dialog__error", role: "alert", "{message}" }
                }
                div { class: "dialog__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_cancel.call(()),
                        {t!("dialog-cancel")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: draft().trim().is_empty(),
                        onclick: move |_| on_save.call(draft()),
                        {t!("dialog-update")}
                    }
                }
            }
        }
    }
}
