use dioxus::prelude::*;

use super::{
    attach_hover, attach_wedge_hover, build_chart_primitives, build_pie_primitives, path_data,
    Bar, Canvas, ChartMode, ChartSeries, HoverHandlers, HoverState, MarkKey, Marker, PieSlice,
    Primitive, ScreenRect, Wedge,
};
use crate::t;

const RESTING_OPACITY: f64 = 0.85;

/// Interactive SVG chart. Pass `slices` to draw pre-aggregated pie data
/// instead of series averages.
#[component]
pub fn ChartCanvas(
    series: Vec<ChartSeries>,
    mode: ChartMode,
    #[props(default)] slices: Vec<PieSlice>,
    #[props(default)] canvas: Canvas,
) -> Element {
    let hover = use_signal(HoverState::default);
    let mut progress = use_signal(|| 0.0_f64);

    // Bars start flat and grow once mounted; the CSS transition animates it.
    use_effect(move || progress.set(1.0));

    let primitives = if mode == ChartMode::Pie && !slices.is_empty() {
        build_pie_primitives(&slices, canvas)
    } else {
        build_chart_primitives(&series, mode, canvas)
    };

    if primitives.is_empty() {
        return rsx! {
            div { class: "chart chart--empty",
                p { class: "chart__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let state = hover();
    let tooltip = state
        .visible_payload()
        .cloned()
        .zip(state.tooltip_position);

    let chart_class = format!("chart chart--{}", mode.label().to_lowercase());

    rsx! {
        div { class: "{chart_class}",
            svg {
                class: "chart__svg",
                view_box: "{canvas.view_box()}",
                preserve_aspect_ratio: "xMidYMid meet",
                for primitive in primitives {
                    {render_primitive(primitive, &series, &state, progress(), hover)}
                }
            }
            if let Some((payload, position)) = tooltip {
                div {
                    class: "chart__tooltip",
                    style: "left: {position.x}px; top: {position.y}px;",
                    span {
                        class: "chart__tooltip-swatch",
                        style: "background: {payload.color};",
                    }
                    span { class: "chart__tooltip-label", "{payload.label}" }
                    strong { class: "chart__tooltip-value", "{payload.value_text()}" }
                }
            }
        }
    }
}

fn render_primitive(
    primitive: Primitive,
    series: &[ChartSeries],
    state: &HoverState,
    progress: f64,
    hover: Signal<HoverState>,
) -> Element {
    match primitive {
        Primitive::GridLine(line) => {
            let tick_x = line.x1 - 8.0;
            let tick_y = line.y + 4.0;
            rsx! {
                line {
                    class: "chart__grid",
                    x1: "{line.x1}",
                    y1: "{line.y}",
                    x2: "{line.x2}",
                    y2: "{line.y}",
                    stroke_dasharray: "4 4",
                }
                text {
                    class: "chart__tick",
                    x: "{tick_x}",
                    y: "{tick_y}",
                    text_anchor: "end",
                    "{line.label}"
                }
            }
        }
        Primitive::AxisLabel(label) => rsx! {
            text {
                class: "chart__tick",
                x: "{label.at.x}",
                y: "{label.at.y}",
                text_anchor: label.anchor.as_str(),
                "{label.text}"
            }
        },
        Primitive::Path(path) => {
            let d = path_data(&path.commands);
            rsx! {
                path {
                    class: "chart__line",
                    d: "{d}",
                    fill: "none",
                    stroke: "{path.color}",
                    stroke_width: "3",
                }
            }
        }
        Primitive::Marker(marker) => {
            let handlers = handlers_for(marker.mark, series);
            render_marker(marker, state, handlers, hover)
        }
        Primitive::Bar(bar) => {
            let handlers = handlers_for(bar.mark, series);
            render_bar(bar.at_progress(progress), state, handlers, hover)
        }
        Primitive::Wedge(wedge) => {
            let handlers = attach_wedge_hover(&wedge);
            render_wedge(wedge, state, handlers, hover)
        }
        Primitive::Callout(callout) => rsx! {
            line {
                class: "chart__callout-line",
                x1: "{callout.from.x}",
                y1: "{callout.from.y}",
                x2: "{callout.to.x}",
                y2: "{callout.to.y}",
            }
            text {
                class: "chart__callout",
                x: "{callout.label_at.x}",
                y: "{callout.label_at.y}",
                text_anchor: callout.anchor.as_str(),
                "{callout.text}"
            }
        },
    }
}

fn handlers_for(mark: MarkKey, series: &[ChartSeries]) -> Option<HoverHandlers> {
    let (series_idx, sample_idx) = match mark {
        MarkKey::Point { series, sample } | MarkKey::Bar { series, sample } => (series, sample),
        MarkKey::Wedge { .. } => return None,
    };
    let entry = series.get(series_idx)?;
    let sample = entry.samples.get(sample_idx)?;
    Some(attach_hover(mark, entry, sample))
}

fn opacity_for(mark: MarkKey, state: &HoverState) -> f64 {
    if state.is_active(mark) {
        1.0
    } else {
        RESTING_OPACITY
    }
}

fn pointer_enter(
    handlers: Option<HoverHandlers>,
    mut hover: Signal<HoverState>,
) -> impl FnMut(MouseEvent) {
    move |evt: MouseEvent| {
        if let Some(handlers) = handlers.as_ref() {
            let point = evt.client_coordinates();
            let anchor = ScreenRect::from_point(point.x, point.y);
            handlers.on_pointer_enter(&mut hover.write(), anchor);
        }
    }
}

fn pointer_leave(
    handlers: Option<HoverHandlers>,
    mut hover: Signal<HoverState>,
) -> impl FnMut(MouseEvent) {
    move |_| {
        if let Some(handlers) = handlers.as_ref() {
            handlers.on_pointer_leave(&mut hover.write());
        }
    }
}

fn render_marker(
    marker: Marker,
    state: &HoverState,
    handlers: Option<HoverHandlers>,
    hover: Signal<HoverState>,
) -> Element {
    let opacity = opacity_for(marker.mark, state);
    rsx! {
        circle {
            class: "chart__marker",
            cx: "{marker.center.x}",
            cy: "{marker.center.y}",
            r: "{marker.radius}",
            fill: "{marker.color}",
            opacity: "{opacity}",
            onmouseenter: pointer_enter(handlers.clone(), hover),
            onmouseleave: pointer_leave(handlers, hover),
        }
    }
}

fn render_bar(
    bar: Bar,
    state: &HoverState,
    handlers: Option<HoverHandlers>,
    hover: Signal<HoverState>,
) -> Element {
    let opacity = opacity_for(bar.mark, state);
    rsx! {
        rect {
            class: "chart__bar",
            x: "{bar.x}",
            y: "{bar.y}",
            width: "{bar.width}",
            height: "{bar.height}",
            rx: "4",
            fill: "{bar.color}",
            opacity: "{opacity}",
            onmouseenter: pointer_enter(handlers.clone(), hover),
            onmouseleave: pointer_leave(handlers, hover),
        }
    }
}

fn render_wedge(
    wedge: Wedge,
    state: &HoverState,
    handlers: HoverHandlers,
    hover: Signal<HoverState>,
) -> Element {
    let opacity = opacity_for(wedge.mark, state);
    let d = path_data(&wedge.commands);
    let handlers = Some(handlers);
    rsx! {
        path {
            class: "chart__wedge",
            d: "{d}",
            fill: "{wedge.color}",
            opacity: "{opacity}",
            onmouseenter: pointer_enter(handlers.clone(), hover),
            onmouseleave: pointer_leave(handlers, hover),
        }
    }
}

