//! Report exports: task board as JSON/CSV and the current chart as SVG.
//!
//! Payload builders are pure; delivery differs per platform. In the browser a
//! download is triggered through a temporary anchor (and JSON is also copied
//! to the clipboard); on desktop files land in `<data dir>/exports`.

use serde::Serialize;
use thiserror::Error;
use time::Date;

use crate::charts::{build_chart_primitives, render_svg, Canvas, ChartMode, ChartSeries};
use crate::core::deadline::classify_deadline;
use crate::data::Task;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Platform(String),

    #[error("nothing to export")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Serialize)]
struct TaskExport<'a> {
    exported_on: String,
    tasks: &'a [Task],
}

pub fn tasks_json(tasks: &[Task], today: Date) -> Result<String> {
    let payload = TaskExport {
        exported_on: crate::core::dates::iso_date(today),
        tasks,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

const CSV_HEADER: [&str; 10] = [
    "id",
    "title",
    "project",
    "assignee",
    "due_date",
    "deadline_status",
    "deadline_label",
    "priority",
    "status",
    "progress",
];

pub fn tasks_csv(tasks: &[Task], today: Date) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');

    for task in tasks {
        let deadline = classify_deadline(task.due_date.as_str(), today);
        let row = [
            task.id.to_string(),
            task.title.clone(),
            task.project.clone(),
            task.assignee.name.clone(),
            task.due_date.clone(),
            deadline.status.as_str().to_string(),
            deadline.label,
            task.priority.label().to_string(),
            task.status.label().to_string(),
            task.progress.to_string(),
        ];
        let line = row
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }

    csv
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

pub fn chart_svg(series: &[ChartSeries], mode: ChartMode, canvas: Canvas) -> Result<String> {
    let primitives = build_chart_primitives(series, mode, canvas);
    if primitives.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(render_svg(&primitives, canvas))
}

pub fn export_filename(stem: &str, extension: &str) -> String {
    format!("volara-{stem}-{}.{extension}", timestamp_slug())
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

pub async fn copy_to_clipboard(payload: String) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let clipboard_err = |msg: &str| ExportError::Clipboard(msg.to_string());
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| clipboard_err("document unavailable"))?;
        let body = document.body().ok_or_else(|| clipboard_err("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| clipboard_err("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| clipboard_err("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .and_then(|doc| doc.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(clipboard_err("copy blocked by the browser"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

/// Deliver `bytes` as a file. Returns the saved path on desktop.
pub async fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let platform_err = |msg: &str| ExportError::Platform(msg.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| platform_err("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| platform_err("unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| platform_err("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| platform_err("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| platform_err("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| platform_err("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "export written");
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf> {
    crate::core::storage::data_dir()
        .map(|dir| dir.join("exports"))
        .map_err(|err| ExportError::Platform(err.to_string()))
}
