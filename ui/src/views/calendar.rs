use dioxus::prelude::*;
use time::Date;

use crate::core::dates::{self, month_grid, YearMonth};
use crate::core::format;
use crate::data::{Agenda, CalendarEvent, EventKind};
use crate::state::use_app_state;
use crate::t;

/// Chips shown inside a day cell before collapsing into "+N".
const CELL_EVENT_LIMIT: usize = 2;

fn kind_label(kind: EventKind) -> String {
    match kind {
        EventKind::Task => t!("calendar-kind-task"),
        EventKind::Milestone => t!("calendar-kind-milestone"),
        EventKind::Deadline => t!("calendar-kind-deadline"),
    }
}

fn weekday_labels() -> [String; 7] {
    [
        t!("calendar-sun"),
        t!("calendar-mon"),
        t!("calendar-tue"),
        t!("calendar-wed"),
        t!("calendar-thu"),
        t!("calendar-fri"),
        t!("calendar-sat"),
    ]
}

/// Month grid of task, project and member dates with a day detail panel.
#[component]
pub fn Calendar() -> Element {
    let state = use_app_state();
    let today = dates::today();

    let mut month = use_signal(|| YearMonth::of(today));
    let mut selected = use_signal(|| today);

    let agenda = Agenda::build(
        state.tasks.read().tasks(),
        &state.projects.read(),
        state.roster.read().members(),
    );

    let current = month();
    let cells = month_grid(current);
    let month_total = t!("calendar-month-count", count = agenda.count_in(current));
    let selected_day = selected();
    let selected_events: Vec<CalendarEvent> = agenda.on(selected_day).to_vec();
    let selected_label = format::format_long_date(selected_day);
    let events_heading = t!("calendar-events", count = selected_events.len());

    rsx! {
        section { class: "page page-calendar",
            header { class: "page__header",
                h1 { {t!("calendar-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        month.set(YearMonth::of(today));
                        selected.set(today);
                    },
                    {t!("calendar-today")}
                }
            }

            div { class: "card calendar",
                div { class: "calendar__toolbar",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        aria_label: t!("calendar-previous"),
                        onclick: move |_| month.set(month().previous()),
                        "‹"
                    }
                    h2 { class: "calendar__month", "{current.label()}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        aria_label: t!("calendar-next"),
                        onclick: move |_| month.set(month().next()),
                        "›"
                    }
                    span { class: "page__meta", "{month_total}" }
                }

                div { class: "calendar__grid", role: "grid",
                    for label in weekday_labels() {
                        div {
                            key: "{label}",
                            class: "calendar__weekday",
                            role: "columnheader",
                            "{label}"
                        }
                    }
                    for (idx, cell) in cells.into_iter().enumerate() {
                        {
                            match cell {
                                Some(date) => rsx! {
                                    CalendarDay {
                                        key: "{date}",
                                        date,
                                        is_today: date == today,
                                        is_selected: date == selected_day,
                                        events: agenda.on(date).to_vec(),
                                        on_select: move |date| selected.set(date),
                                    }
                                },
                                None => rsx! {
                                    div {
                                        key: "blank-{idx}",
                                        class: "calendar__cell calendar__cell--blank",
                                    }
                                },
                            }
                        }
                    }
                }
            }

            div { class: "card calendar-detail",
                div { class: "card__header",
                    h2 { "{selected_label}" }
                    span { class: "page__meta", "{events_heading}" }
                }
                if selected_events.is_empty() {
                    p { class: "card__placeholder", {t!("calendar-no-events")} }
                } else {
                    ul { class: "calendar-detail__list",
                        for (idx, event) in selected_events.into_iter().enumerate() {
                            {
                                let class = format!("calendar-event {}", event.kind.css_class());
                                let kind = kind_label(event.kind);
                                rsx! {
                                    li { key: "{idx}", class: "{class}",
                                        strong { "{event.title}" }
                                        span { class: "calendar-event__kind", "{kind}" }
                                        if let Some(owner) = event.owner {
                                            span { class: "avatar", "{owner}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CalendarDay(
    date: Date,
    is_today: bool,
    is_selected: bool,
    events: Vec<CalendarEvent>,
    on_select: EventHandler<Date>,
) -> Element {
    let mut class = String::from("calendar__cell");
    if is_today {
        class.push_str(" calendar__cell--today");
    }
    if is_selected {
        class.push_str(" calendar__cell--selected");
    }
    let day = date.day();
    let overflow = events.len().saturating_sub(CELL_EVENT_LIMIT);
    let shown: Vec<CalendarEvent> = events.into_iter().take(CELL_EVENT_LIMIT).collect();

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            role: "gridcell",
            aria_selected: "{is_selected}",
            onclick: move |_| on_select.call(date),
            span { class: "calendar__day", "{day}" }
            for (idx, event) in shown.into_iter().enumerate() {
                {
                    let chip = format!("calendar-event {}", event.kind.css_class());
                    rsx! {
                        span {
                            key: "{idx}",
                            class: "{chip}",
                            title: "{event.title}",
                            "{event.title}"
                        }
                    }
                }
            }
            if overflow > 0 {
                span { class: "calendar__more", "+{overflow}" }
            }
        }
    }
}
