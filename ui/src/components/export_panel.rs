use std::future::Future;

use dioxus::prelude::*;

use crate::charts::{Canvas, ChartMode, ChartSeries};
use crate::core::dates;
use crate::data::Task;
use crate::export::{self, ExportError};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn ExportPanel(tasks: Vec<Task>, series: Vec<ChartSeries>, mode: ChartMode) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("export__status".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "export__status export__status--success".to_string(),
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "export__status export__status--error".to_string(),
            err.clone(),
        )),
    };

    let json_tasks = tasks.clone();
    let on_json = move |_: MouseEvent| {
        launch(status, busy, "Preparing JSON", json_job(json_tasks.clone()));
    };
    let csv_tasks = tasks.clone();
    let on_csv = move |_: MouseEvent| {
        launch(status, busy, "Preparing CSV", csv_job(csv_tasks.clone()));
    };
    let svg_series = series.clone();
    let on_svg = move |_: MouseEvent| {
        launch(status, busy, "Preparing SVG", svg_job(svg_series.clone(), mode));
    };

    rsx! {
        section { class: "card export",
            div { class: "card__header",
                h2 { {t!("export-title")} }
            }
            p { {t!("export-intro")} }

            div { class: "export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: on_json,
                    {t!("export-json")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: on_csv,
                    {t!("export-csv")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy() || series.iter().all(ChartSeries::is_empty),
                    onclick: on_svg,
                    {t!("export-svg")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

fn launch<F>(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    label: &'static str,
    job: F,
) where
    F: Future<Output = Result<String, ExportError>> + 'static,
{
    if *busy.peek() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(label));

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        finish(status, busy, job.await);
    });

    #[cfg(not(target_arch = "wasm32"))]
    finish(status, busy, futures::executor::block_on(job));
}

fn finish(
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
    outcome: Result<String, ExportError>,
) {
    match outcome {
        Ok(message) => status.set(ExportStatus::Done(message)),
        Err(err) => {
            tracing::warn!(%err, "export failed");
            status.set(ExportStatus::Error(err.to_string()));
        }
    }
    busy.set(false);
}

fn delivered(kind: &str, saved_to: Option<String>) -> String {
    match saved_to {
        Some(path) => format!("{kind} saved to {path}"),
        None => format!("{kind} download started"),
    }
}

async fn json_job(tasks: Vec<Task>) -> Result<String, ExportError> {
    let json = export::tasks_json(&tasks, dates::today())?;
    let copied = match export::copy_to_clipboard(json.clone()).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "JSON export not copied to clipboard");
            false
        }
    };
    let filename = export::export_filename("tasks", "json");
    let saved_to = export::download_bytes(&filename, "application/json", json.into_bytes()).await?;
    let message = delivered("JSON", saved_to);
    Ok(if copied {
        format!("{message} (also copied to clipboard)")
    } else {
        message
    })
}

async fn csv_job(tasks: Vec<Task>) -> Result<String, ExportError> {
    let csv = export::tasks_csv(&tasks, dates::today());
    let filename = export::export_filename("tasks", "csv");
    let saved_to = export::download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(delivered("CSV", saved_to))
}

async fn svg_job(series: Vec<ChartSeries>, mode: ChartMode) -> Result<String, ExportError> {
    let svg = export::chart_svg(&series, mode, Canvas::default())?;
    let filename = export::export_filename("chart", "svg");
    let saved_to = export::download_bytes(&filename, "image/svg+xml", svg.into_bytes()).await?;
    Ok(delivered("SVG", saved_to))
}
