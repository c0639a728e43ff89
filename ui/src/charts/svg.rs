//! Serializes chart primitives into SVG path data and standalone documents.

use std::fmt::Write;

use super::{Canvas, PathCommand, Primitive};

const GRID_STROKE: &str = "#E0E0E0";
const LABEL_FILL: &str = "#666666";
const FONT: &str = "font-family='Inter, sans-serif' font-size='12'";

/// Compact coordinate: at most two decimals, trailing zeros dropped.
pub fn format_coord(value: f64) -> String {
    if !value.is_finite() {
        return "0".into();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".into();
    }
    text
}

/// SVG `d` attribute for `commands`.
pub fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => format!("M {} {}", format_coord(p.x), format_coord(p.y)),
            PathCommand::LineTo(p) => format!("L {} {}", format_coord(p.x), format_coord(p.y)),
            PathCommand::CubicTo { c1, c2, to } => format!(
                "C {} {} {} {} {} {}",
                format_coord(c1.x),
                format_coord(c1.y),
                format_coord(c2.x),
                format_coord(c2.y),
                format_coord(to.x),
                format_coord(to.y)
            ),
            PathCommand::Arc {
                radius,
                large_arc,
                clockwise,
                to,
            } => {
                let r = format_coord(*radius);
                format!(
                    "A {r} {r} 0 {} {} {} {}",
                    u8::from(*large_arc),
                    u8::from(*clockwise),
                    format_coord(to.x),
                    format_coord(to.y)
                )
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

/// Standalone SVG document for exports. Hover state is not part of it.
pub fn render_svg(primitives: &[Primitive], canvas: Canvas) -> String {
    let w = format_coord(canvas.width);
    let h = format_coord(canvas.frame_height());
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = writeln!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='{}'>",
        canvas.view_box()
    );
    let _ = writeln!(out, "  <rect y='-10' width='{w}' height='{h}' fill='#ffffff'/>");

    for primitive in primitives {
        let _ = match primitive {
            Primitive::GridLine(line) => writeln!(
                out,
                "  <line x1='{x1}' y1='{y}' x2='{x2}' y2='{y}' stroke='{GRID_STROKE}' stroke-dasharray='4 4'/>\n  <text x='{lx}' y='{ly}' text-anchor='end' fill='{LABEL_FILL}' {FONT}>{label}</text>",
                x1 = format_coord(line.x1),
                x2 = format_coord(line.x2),
                y = format_coord(line.y),
                lx = format_coord(line.x1 - 8.0),
                ly = format_coord(line.y + 4.0),
                label = escape_text(&line.label),
            ),
            Primitive::AxisLabel(label) => writeln!(
                out,
                "  <text x='{}' y='{}' text-anchor='{}' fill='{LABEL_FILL}' {FONT}>{}</text>",
                format_coord(label.at.x),
                format_coord(label.at.y),
                label.anchor.as_str(),
                escape_text(&label.text)
            ),
            Primitive::Path(path) => writeln!(
                out,
                "  <path d='{}' fill='none' stroke='{}' stroke-width='3'/>",
                path_data(&path.commands),
                escape_text(&path.color)
            ),
            Primitive::Marker(marker) => writeln!(
                out,
                "  <circle cx='{}' cy='{}' r='{}' fill='{}'/>",
                format_coord(marker.center.x),
                format_coord(marker.center.y),
                format_coord(marker.radius),
                escape_text(&marker.color)
            ),
            Primitive::Bar(bar) => writeln!(
                out,
                "  <rect x='{}' y='{}' width='{}' height='{}' rx='4' fill='{}'/>",
                format_coord(bar.x),
                format_coord(bar.y),
                format_coord(bar.width),
                format_coord(bar.height),
                escape_text(&bar.color)
            ),
            Primitive::Wedge(wedge) => writeln!(
                out,
                "  <path d='{}' fill='{}' stroke='#ffffff' stroke-width='2'/>",
                path_data(&wedge.commands),
                escape_text(&wedge.color)
            ),
            Primitive::Callout(callout) => writeln!(
                out,
                "  <line x1='{}' y1='{}' x2='{}' y2='{}' stroke='{LABEL_FILL}'/>\n  <text x='{}' y='{}' text-anchor='{}' fill='{LABEL_FILL}' {FONT}>{}</text>",
                format_coord(callout.from.x),
                format_coord(callout.from.y),
                format_coord(callout.to.x),
                format_coord(callout.to.y),
                format_coord(callout.label_at.x),
                format_coord(callout.label_at.y),
                callout.anchor.as_str(),
                escape_text(&callout.text)
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{AxisLabel, Point, TextAnchor};

    #[test]
    fn coords_drop_trailing_zeros() {
        assert_eq!(format_coord(40.0), "40");
        assert_eq!(format_coord(176.5), "176.5");
        assert_eq!(format_coord(1.0 / 3.0), "0.33");
        assert_eq!(format_coord(-0.001), "0");
        assert_eq!(format_coord(f64::NAN), "0");
    }

    #[test]
    fn path_data_spells_each_command() {
        let d = path_data(&[
            PathCommand::MoveTo(Point::new(40.0, 176.0)),
            PathCommand::CubicTo {
                c1: Point::new(400.0, 176.0),
                c2: Point::new(400.0, 140.0),
                to: Point::new(760.0, 140.0),
            },
        ]);
        assert_eq!(d, "M 40 176 C 400 176 400 140 760 140");

        let d = path_data(&[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(0.0, -10.0)),
            PathCommand::Arc {
                radius: 10.0,
                large_arc: true,
                clockwise: true,
                to: Point::new(-10.0, 0.0),
            },
            PathCommand::Close,
        ]);
        assert_eq!(d, "M 0 0 L 0 -10 A 10 10 0 1 1 -10 0 Z");
    }

    #[test]
    fn documents_escape_labels() {
        let svg = render_svg(
            &[Primitive::AxisLabel(AxisLabel {
                at: Point::new(10.0, 20.0),
                text: "R&D <core>".into(),
                anchor: TextAnchor::Middle,
            })],
            Canvas::default(),
        );
        assert!(svg.starts_with("<svg xmlns='http://www.w3.org/2000/svg'"));
        assert!(svg.contains("viewBox='0 -10 800 450'"));
        assert!(svg.contains("R&amp;D &lt;core&gt;"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
