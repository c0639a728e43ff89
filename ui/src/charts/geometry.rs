//! Converts chart series into drawable primitives on a logical canvas.

use super::{
    AxisLabel, Bar, Callout, Canvas, ChartMode, ChartSeries, GridLine, MarkKey, Marker,
    PathCommand, PieSlice, Point, Primitive, SeriesPath, TextAnchor, Wedge,
};

/// Horizontal padding between the canvas edge and the plot area.
pub const PLOT_INSET: f64 = 40.0;
/// Gridline levels, top to bottom.
pub const GRID_LEVELS: [f64; 5] = [100.0, 75.0, 50.0, 25.0, 0.0];
pub const MARKER_RADIUS: f64 = 5.0;
pub const BAR_WIDTH: f64 = 24.0;
pub const BAR_GAP: f64 = 8.0;
/// Wedges at or below this sweep get no callout.
pub const CALLOUT_MIN_SWEEP_DEG: f64 = 30.0;
pub const REMAINING_LABEL: &str = "Remaining";
pub const REMAINING_COLOR: &str = "#E0E0E0";

const AXIS_LABEL_DROP: f64 = 24.0;
const PIE_MARGIN: f64 = 40.0;
const CALLOUT_LEADER: f64 = 16.0;
const CALLOUT_LABEL_GAP: f64 = 28.0;
const FULL_TURN: f64 = 360.0;
const SWEEP_EPSILON: f64 = 1e-9;

/// Build the primitives for `series` drawn in `mode`.
///
/// Returns nothing when every series is empty.
pub fn build_chart_primitives(
    series: &[ChartSeries],
    mode: ChartMode,
    canvas: Canvas,
) -> Vec<Primitive> {
    if series.iter().all(ChartSeries::is_empty) {
        return Vec::new();
    }

    match mode {
        ChartMode::Line => line_primitives(series, canvas),
        ChartMode::Bar => bar_primitives(series, canvas),
        ChartMode::Pie => build_pie_primitives(&pie_slices(series), canvas),
    }
}

fn grid_lines(canvas: Canvas) -> impl Iterator<Item = Primitive> {
    GRID_LEVELS.into_iter().map(move |level| {
        Primitive::GridLine(GridLine {
            y: canvas.y_for(level),
            x1: PLOT_INSET,
            x2: canvas.width - PLOT_INSET,
            label: format!("{level:.0}%"),
        })
    })
}

/// Linear map from sample `x` onto the plot area.
struct XScale {
    min: f64,
    max: f64,
    left: f64,
    right: f64,
}

impl XScale {
    fn for_series(series: &[ChartSeries], canvas: Canvas) -> Self {
        let xs = series.iter().flat_map(|s| s.samples.iter().map(|p| p.x));
        let (min, max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
        Self {
            min,
            max,
            left: PLOT_INSET,
            right: canvas.width - PLOT_INSET,
        }
    }

    fn x_for(&self, x: f64) -> f64 {
        let span = self.max - self.min;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            (self.left + self.right) / 2.0
        } else {
            self.left + (x - self.min) / span * (self.right - self.left)
        }
    }
}

fn line_primitives(series: &[ChartSeries], canvas: Canvas) -> Vec<Primitive> {
    let scale = XScale::for_series(series, canvas);
    let mut primitives: Vec<Primitive> = grid_lines(canvas).collect();

    if let Some(first) = series.iter().find(|s| !s.is_empty()) {
        primitives.extend(first.samples.iter().map(|sample| {
            Primitive::AxisLabel(AxisLabel {
                at: Point::new(scale.x_for(sample.x), canvas.height + AXIS_LABEL_DROP),
                text: sample.label.clone(),
                anchor: TextAnchor::Middle,
            })
        }));
    }

    let mut markers = Vec::new();
    for (series_idx, entry) in series.iter().enumerate() {
        if entry.is_empty() {
            continue;
        }

        let points: Vec<Point> = entry
            .samples
            .iter()
            .map(|sample| Point::new(scale.x_for(sample.x), canvas.y_for(sample.y)))
            .collect();

        primitives.push(Primitive::Path(SeriesPath {
            series: series_idx,
            color: entry.color.clone(),
            commands: smooth_path(&points),
        }));

        markers.extend(points.iter().enumerate().map(|(sample_idx, point)| {
            Primitive::Marker(Marker {
                mark: MarkKey::Point {
                    series: series_idx,
                    sample: sample_idx,
                },
                center: *point,
                radius: MARKER_RADIUS,
                color: entry.color.clone(),
            })
        }));
    }

    primitives.extend(markers);
    primitives
}

/// Flat-tangent cubic through `points`: both control points sit on the
/// horizontal midpoint, at the previous and the current level respectively.
fn smooth_path(points: &[Point]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len());
    let mut prev: Option<Point> = None;

    for &point in points {
        match prev {
            None => commands.push(PathCommand::MoveTo(point)),
            Some(p) => {
                let mid = p.x + (point.x - p.x) / 2.0;
                commands.push(PathCommand::CubicTo {
                    c1: Point::new(mid, p.y),
                    c2: Point::new(mid, point.y),
                    to: point,
                });
            }
        }
        prev = Some(point);
    }

    commands
}

fn bar_primitives(series: &[ChartSeries], canvas: Canvas) -> Vec<Primitive> {
    let slots = series.iter().map(|s| s.samples.len()).max().unwrap_or(0);
    let per_group = series.len();
    let mut primitives: Vec<Primitive> = grid_lines(canvas).collect();
    if slots == 0 || per_group == 0 {
        return primitives;
    }

    let slot_width = (canvas.width - 2.0 * PLOT_INSET) / slots as f64;
    let gaps = BAR_GAP * (per_group - 1) as f64;
    let bar_width = BAR_WIDTH
        .min((slot_width * 0.8 - gaps) / per_group as f64)
        .max(1.0);
    let group_width = bar_width * per_group as f64 + gaps;

    let slot_center = |slot: usize| PLOT_INSET + (slot as f64 + 0.5) * slot_width;

    if let Some(first) = series.iter().find(|s| !s.is_empty()) {
        primitives.extend(first.samples.iter().enumerate().map(|(slot, sample)| {
            Primitive::AxisLabel(AxisLabel {
                at: Point::new(slot_center(slot), canvas.height + AXIS_LABEL_DROP),
                text: sample.label.clone(),
                anchor: TextAnchor::Middle,
            })
        }));
    }

    for slot in 0..slots {
        let group_left = slot_center(slot) - group_width / 2.0;
        for (series_idx, entry) in series.iter().enumerate() {
            let Some(sample) = entry.samples.get(slot) else {
                continue;
            };
            let height = sample.clamped_value() * canvas.scale();
            primitives.push(Primitive::Bar(Bar {
                mark: MarkKey::Bar {
                    series: series_idx,
                    sample: slot,
                },
                x: group_left + series_idx as f64 * (bar_width + BAR_GAP),
                y: canvas.height - height,
                width: bar_width,
                height,
                color: entry.color.clone(),
            }));
        }
    }

    primitives
}

/// One slice per non-empty series (its average) plus the remainder to 100%.
pub fn pie_slices(series: &[ChartSeries]) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = series
        .iter()
        .filter_map(|entry| {
            entry
                .average()
                .map(|avg| PieSlice::new(entry.name.clone(), avg, entry.color.clone()))
        })
        .collect();

    if slices.is_empty() {
        return slices;
    }

    let used: f64 = slices.iter().map(|slice| slice.value).sum();
    slices.push(PieSlice::new(
        REMAINING_LABEL,
        (100.0 - used).max(0.0),
        REMAINING_COLOR,
    ));
    slices
}

/// Wedges (and callouts) for pre-aggregated slices.
///
/// A zero total is treated as `1`, which leaves every sweep at zero and draws
/// nothing.
pub fn build_pie_primitives(slices: &[PieSlice], canvas: Canvas) -> Vec<Primitive> {
    let values: Vec<f64> = slices
        .iter()
        .map(|slice| {
            if slice.value.is_finite() {
                slice.value.max(0.0)
            } else {
                0.0
            }
        })
        .collect();
    let sum: f64 = values.iter().sum();
    let total = if sum > 0.0 { sum } else { 1.0 };

    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    let radius = (canvas.width.min(canvas.height) / 2.0 - PIE_MARGIN).max(1.0);

    let mut primitives = Vec::new();
    let mut callouts = Vec::new();
    let mut start = 0.0;

    for (idx, (slice, value)) in slices.iter().zip(values).enumerate() {
        let sweep = value / total * FULL_TURN;
        if sweep <= SWEEP_EPSILON {
            continue;
        }

        primitives.push(Primitive::Wedge(Wedge {
            mark: MarkKey::Wedge { slice: idx },
            name: slice.name.clone(),
            value,
            color: slice.color.clone(),
            start_angle: start,
            sweep,
            commands: wedge_commands(center, radius, start, sweep),
        }));

        if sweep > CALLOUT_MIN_SWEEP_DEG {
            let mid = start + sweep / 2.0;
            let label_at = polar(center, radius + CALLOUT_LABEL_GAP, mid);
            let share = value / total * 100.0;
            callouts.push(Primitive::Callout(Callout {
                slice: idx,
                from: polar(center, radius, mid),
                to: polar(center, radius + CALLOUT_LEADER, mid),
                label_at,
                text: format!("{} {share:.0}%", slice.name),
                anchor: if label_at.x >= center.x {
                    TextAnchor::Start
                } else {
                    TextAnchor::End
                },
            }));
        }

        start += sweep;
    }

    primitives.extend(callouts);
    primitives
}

/// Rim point at `angle` degrees clockwise from 12 o'clock.
fn polar(center: Point, radius: f64, angle: f64) -> Point {
    let radians = (angle - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

fn wedge_commands(center: Point, radius: f64, start: f64, sweep: f64) -> Vec<PathCommand> {
    if sweep >= FULL_TURN - SWEEP_EPSILON {
        // An arc whose endpoints coincide renders nothing; split the circle.
        let top = polar(center, radius, start);
        let bottom = polar(center, radius, start + 180.0);
        return vec![
            PathCommand::MoveTo(top),
            PathCommand::Arc {
                radius,
                large_arc: false,
                clockwise: true,
                to: bottom,
            },
            PathCommand::Arc {
                radius,
                large_arc: false,
                clockwise: true,
                to: top,
            },
            PathCommand::Close,
        ];
    }

    vec![
        PathCommand::MoveTo(center),
        PathCommand::LineTo(polar(center, radius, start)),
        PathCommand::Arc {
            radius,
            large_arc: sweep > 180.0,
            clockwise: true,
            to: polar(center, radius, start + sweep),
        },
        PathCommand::Close,
    ]
}
