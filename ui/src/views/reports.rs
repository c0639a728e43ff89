use dioxus::prelude::*;

use crate::charts::{ChartCanvas, ChartMode, ChartSeries};
use crate::components::ExportPanel;
use crate::core::format;
use crate::data::{mock, MonthlyCompletion, ReportRange, TeamPerformance};
use crate::state::use_app_state;
use crate::t;

/// Headline figures of the performance summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub average_rate: f64,
    pub completed: u32,
    pub total: u32,
    pub best_team: Option<(String, u32)>,
}

pub fn summarize(rows: &[MonthlyCompletion], teams: &[TeamPerformance]) -> ReportSummary {
    let completed = rows.iter().map(|row| row.completed).sum();
    let total = rows.iter().map(|row| row.total).sum();
    let average_rate = if rows.is_empty() {
        f64::NAN
    } else {
        rows.iter().map(MonthlyCompletion::rate).sum::<f64>() / rows.len() as f64
    };
    let best_team = teams
        .iter()
        .max_by_key(|team| team.efficiency())
        .map(|team| (team.team.clone(), team.efficiency()));

    ReportSummary {
        average_rate,
        completed,
        total,
        best_team,
    }
}

fn range_label(range: ReportRange) -> String {
    match range {
        ReportRange::Week => t!("reports-range-week"),
        ReportRange::Month => t!("reports-range-month"),
        ReportRange::Year => t!("reports-range-year"),
    }
}

#[component]
pub fn Reports() -> Element {
    let state = use_app_state();
    let mut range = use_signal(ReportRange::default);
    let teams = use_hook(mock::team_performance);

    let rows = mock::completion_by_range(range());
    let series: Vec<ChartSeries> = vec![mock::completion_series(&rows)];
    let summary = summarize(&rows, &teams);
    let slices = mock::team_slices(&teams);
    let tasks = state.tasks.read().tasks().to_vec();

    rsx! {
        section { class: "page page-reports",
            header { class: "page__header",
                h1 { {t!("reports-title")} }
                div { class: "segmented", role: "group",
                    for option in ReportRange::ALL {
                        {
                            let active = option == range();
                            let class = if active {
                                "segmented__item segmented__item--active"
                            } else {
                                "segmented__item"
                            };
                            rsx! {
                                button {
                                    key: "{option.as_str()}",
                                    r#type: "button",
                                    class,
                                    aria_pressed: "{active}",
                                    onclick: move |_| range.set(option),
                                    "{range_label(option)}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "reports-grid",
                div { class: "card",
                    h2 { {t!("reports-completion")} }
                    ChartCanvas { key: "{range().as_str()}", series: series.clone(), mode: ChartMode::Bar }
                }

                div { class: "card card--summary",
                    h2 { {t!("reports-summary")} }
                    dl { class: "summary",
                        dt { {t!("reports-avg-rate")} }
                        dd { "{format::format_percent(summary.average_rate)}" }
                        dt { {t!("reports-total-completed")} }
                        dd { "{format::format_ratio(summary.completed, summary.total)}" }
                        if let Some((team, efficiency)) = summary.best_team.clone() {
                            dt { {t!("reports-best-team")} }
                            dd { "{team} · {efficiency}%" }
                        }
                    }
                }
            }

            div { class: "reports-grid",
                div { class: "card",
                    h2 { {t!("reports-team")} }
                    table { class: "team-table",
                        thead {
                            tr {
                                th { {t!("reports-col-team")} }
                                th { {t!("reports-col-completed")} }
                                th { {t!("reports-col-ongoing")} }
                                th { {t!("reports-col-upcoming")} }
                                th { {t!("reports-col-efficiency")} }
                            }
                        }
                        tbody {
                            for team in teams.iter().cloned() {
                                tr { key: "{team.team}",
                                    td { "{team.team}" }
                                    td { "{team.completed}" }
                                    td { "{team.ongoing}" }
                                    td { "{team.upcoming}" }
                                    td {
                                        div { class: "progress", title: "{team.efficiency()}%",
                                            div { class: "progress__bar", style: "width: {team.efficiency()}%;" }
                                        }
                                        span { class: "team-table__efficiency", "{team.efficiency()}%" }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "card",
                    h2 { {t!("reports-team-share")} }
                    ChartCanvas { series: Vec::new(), mode: ChartMode::Pie, slices: slices }
                }
            }

            ExportPanel { tasks: tasks, series: series, mode: ChartMode::Bar }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_monthly_data() {
        let rows = mock::completion_by_range(ReportRange::Month);
        let teams = mock::team_performance();
        let summary = summarize(&rows, &teams);

        assert_eq!(summary.completed, 280);
        assert_eq!(summary.total, 345);
        assert_eq!(summary.best_team, Some(("Marketing Team".to_string(), 86)));
        assert!((summary.average_rate - 81.55).abs() < 0.01);
    }

    #[test]
    fn empty_summary_has_no_rate() {
        let summary = summarize(&[], &[]);
        assert!(summary.average_rate.is_nan());
        assert_eq!(summary.best_team, None);
    }
}
