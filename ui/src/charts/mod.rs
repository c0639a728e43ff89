//! Chart model shared by the geometry builder, the hover state machine and the
//! SVG renderers.
//!
//! Geometry is computed on a fixed logical canvas (800×400 by default); the
//! view maps it onto the screen through the SVG `viewBox`, so nothing here
//! depends on the real element size.

mod geometry;
mod interaction;
mod svg;
mod view;

pub use geometry::{
    build_chart_primitives, build_pie_primitives, pie_slices, BAR_GAP, BAR_WIDTH,
    CALLOUT_MIN_SWEEP_DEG, GRID_LEVELS, MARKER_RADIUS, PLOT_INSET, REMAINING_COLOR,
    REMAINING_LABEL,
};
pub use interaction::{
    attach_hover, attach_wedge_hover, HoverHandlers, HoverState, ScreenRect, TooltipPayload,
    TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y,
};
pub use svg::{format_coord, path_data, render_svg};
pub use view::ChartCanvas;

use serde::{Deserialize, Serialize};

/// One plotted value. `y` is a percentage; `x` orders samples within a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Sample {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Value clamped into the plottable `0..=100` range. NaN becomes `0`.
    pub fn clamped_value(&self) -> f64 {
        clamp_percent(self.y)
    }
}

pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub samples: Vec<Sample>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean of the clamped sample values, `None` for an empty series.
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            let sum: f64 = self.samples.iter().map(Sample::clamped_value).sum();
            Some(sum / self.samples.len() as f64)
        }
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

const LABEL_MARGIN_TOP: f64 = 10.0;
const LABEL_MARGIN_BOTTOM: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixels per percentage point.
    pub fn scale(&self) -> f64 {
        self.height / 100.0
    }

    pub fn y_for(&self, value: f64) -> f64 {
        self.height - clamp_percent(value) * self.scale()
    }

    /// Plot height plus the label margins above and below it.
    pub fn frame_height(&self) -> f64 {
        self.height + LABEL_MARGIN_TOP + LABEL_MARGIN_BOTTOM
    }

    /// `viewBox` covering the plot and the axis labels under it.
    pub fn view_box(&self) -> String {
        format!(
            "0 {} {} {}",
            format_coord(-LABEL_MARGIN_TOP),
            format_coord(self.width),
            format_coord(self.frame_height())
        )
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartMode {
    Line,
    Bar,
    Pie,
}

impl ChartMode {
    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Line => "Line",
            ChartMode::Bar => "Bar",
            ChartMode::Pie => "Pie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Arc {
        radius: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },
    Close,
}

/// Identity of an interactive mark within one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKey {
    Point { series: usize, sample: usize },
    Bar { series: usize, sample: usize },
    Wedge { slice: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub at: Point,
    pub text: String,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub series: usize,
    pub color: String,
    pub commands: Vec<PathCommand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub mark: MarkKey,
    pub center: Point,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub mark: MarkKey,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Bar {
    pub fn baseline(&self) -> f64 {
        self.y + self.height
    }

    /// Entrance-transition frame: `0.0` is a flat bar on the baseline, `1.0`
    /// the final geometry.
    pub fn at_progress(&self, progress: f64) -> Bar {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let height = self.height * t;
        Bar {
            y: self.baseline() - height,
            height,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub mark: MarkKey,
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    pub sweep: f64,
    pub commands: Vec<PathCommand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub slice: usize,
    pub from: Point,
    pub to: Point,
    pub label_at: Point,
    pub text: String,
    pub anchor: TextAnchor,
}

/// Drawable output of [`build_chart_primitives`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    GridLine(GridLine),
    AxisLabel(AxisLabel),
    Path(SeriesPath),
    Marker(Marker),
    Bar(Bar),
    Wedge(Wedge),
    Callout(Callout),
}

impl Primitive {
    pub fn mark(&self) -> Option<MarkKey> {
        match self {
            Primitive::Marker(marker) => Some(marker.mark),
            Primitive::Bar(bar) => Some(bar.mark),
            Primitive::Wedge(wedge) => Some(wedge.mark),
            _ => None,
        }
    }
}

/// Named aggregate fed into pie mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl PieSlice {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}
