//! Hover state machine shared by every interactive chart mark.
//!
//! Each chart owns one [`HoverState`]. Marks get a [`HoverHandlers`] value
//! that knows which mark it belongs to and what the tooltip should say; the
//! view forwards pointer events to it. Only one mark is hovered at a time and
//! the most recent enter wins, so a late leave from a previously hovered mark
//! must not clear the tooltip of the current one.

use serde::Serialize;

use super::{ChartSeries, MarkKey, Point, Sample, Wedge};

/// Tooltip offset from the right edge of the hovered mark.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
/// Tooltip offset from the top edge of the hovered mark (upwards).
pub const TOOLTIP_OFFSET_Y: f64 = -40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipPayload {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl TooltipPayload {
    pub fn value_text(&self) -> String {
        crate::core::format::format_percent(self.value)
    }
}

/// Screen-space bounding box of a mark, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Degenerate rect at a pointer position.
    pub const fn from_point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    pub active: Option<MarkKey>,
    pub payload: Option<TooltipPayload>,
    pub tooltip_position: Option<Point>,
    pub visible: bool,
}

impl HoverState {
    pub fn visible_payload(&self) -> Option<&TooltipPayload> {
        if self.visible {
            self.payload.as_ref()
        } else {
            None
        }
    }

    pub fn is_active(&self, mark: MarkKey) -> bool {
        self.active == Some(mark)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Pointer handlers bound to a single mark.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverHandlers {
    pub mark: MarkKey,
    pub payload: TooltipPayload,
}

impl HoverHandlers {
    pub fn on_pointer_enter(&self, state: &mut HoverState, rect: ScreenRect) -> TooltipPayload {
        state.active = Some(self.mark);
        state.payload = Some(self.payload.clone());
        state.tooltip_position = Some(Point::new(
            rect.right() + TOOLTIP_OFFSET_X,
            rect.top + TOOLTIP_OFFSET_Y,
        ));
        state.visible = true;
        tracing::trace!(mark = ?self.mark, label = %self.payload.label, "chart hover enter");
        self.payload.clone()
    }

    /// Returns the payload still on screen afterwards.
    pub fn on_pointer_leave(&self, state: &mut HoverState) -> Option<TooltipPayload> {
        if state.is_active(self.mark) {
            tracing::trace!(mark = ?self.mark, "chart hover leave");
            state.reset();
            None
        } else {
            state.visible_payload().cloned()
        }
    }
}

pub fn attach_hover(mark: MarkKey, series: &ChartSeries, sample: &Sample) -> HoverHandlers {
    HoverHandlers {
        mark,
        payload: TooltipPayload {
            label: sample.label.clone(),
            value: sample.clamped_value(),
            color: series.color.clone(),
        },
    }
}

pub fn attach_wedge_hover(wedge: &Wedge) -> HoverHandlers {
    HoverHandlers {
        mark: wedge.mark,
        payload: TooltipPayload {
            label: wedge.name.clone(),
            value: wedge.value,
            color: wedge.color.clone(),
        },
    }
}
