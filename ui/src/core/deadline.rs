//! Deadline classification for task and member due dates.
//!
//! Policy
//! ------
//! - `Overdue`: the due date is before today.
//! - `Soon`: due today or within the next [`SOON_WITHIN_DAYS`] days.
//! - `Normal`: everything else, including dates we could not parse.
//!
//! Labels use their own window: relative wording ("Due in 5 days") is used up
//! to [`RELATIVE_LABEL_DAYS`] days ahead, otherwise the absolute date. The two
//! windows are independent on purpose; do not fold one into the other.
//!
//! Minimal API
//! -----------
//! - `classify_deadline(due, today)` → `Deadline`
//! - `classify_deadline_today(due)` → `Deadline` against the wall clock
//! - `DeadlineStatus::palette()` / `css_class()` for the chip styling

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

use super::dates::{self, DueDateLike};

/// Inclusive upper bound (in days) of the `Soon` status.
pub const SOON_WITHIN_DAYS: i64 = 3;
/// Inclusive upper bound (in days) of relative "Due in N days" labels.
pub const RELATIVE_LABEL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    Overdue,
    Soon,
    Normal,
}

/// Background/foreground pair for a deadline chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipPalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

const OVERDUE_PALETTE: ChipPalette = ChipPalette {
    background: "rgba(176, 0, 32, 0.1)",
    foreground: "#B00020",
};
const SOON_PALETTE: ChipPalette = ChipPalette {
    background: "#ffb74d",
    foreground: "#f57c00",
};
const NORMAL_PALETTE: ChipPalette = ChipPalette {
    background: "#e8f5e9",
    foreground: "#2e7d32",
};

impl DeadlineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Soon => "soon",
            Self::Normal => "normal",
        }
    }

    pub fn palette(&self) -> ChipPalette {
        match self {
            Self::Overdue => OVERDUE_PALETTE,
            Self::Soon => SOON_PALETTE,
            Self::Normal => NORMAL_PALETTE,
        }
    }

    /// CSS modifier, e.g. `deadline-chip--overdue`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Overdue => "deadline-chip--overdue",
            Self::Soon => "deadline-chip--soon",
            Self::Normal => "deadline-chip--normal",
        }
    }
}

/// Classification plus display label for one due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deadline {
    pub status: DeadlineStatus,
    pub label: String,
    /// `None` when the due date could not be parsed.
    pub offset: Option<i64>,
}

impl Deadline {
    /// Neutral result used for unparseable input.
    pub fn unknown() -> Self {
        Self {
            status: DeadlineStatus::Normal,
            label: String::new(),
            offset: None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.offset.is_some()
    }
}

pub fn classify(offset: i64) -> DeadlineStatus {
    if offset < 0 {
        DeadlineStatus::Overdue
    } else if offset <= SOON_WITHIN_DAYS {
        DeadlineStatus::Soon
    } else {
        DeadlineStatus::Normal
    }
}

pub fn format_label(target: Date, today: Date) -> String {
    label_for_offset(target, dates::day_offset(target, today))
}

fn label_for_offset(target: Date, offset: i64) -> String {
    match offset {
        0 => "Due today".to_string(),
        1 => "Due in 1 day".to_string(),
        2..=RELATIVE_LABEL_DAYS => format!("Due in {offset} days"),
        _ => format_short_date(target),
    }
}

/// `M/D/YYYY`, the en-US short date.
pub fn format_short_date(date: Date) -> String {
    date.format(&format_description!(
        "[month padding:none]/[day padding:none]/[year]"
    ))
    .unwrap_or_default()
}

/// Classify `target` relative to `today`.
pub fn classify_deadline<T: DueDateLike>(target: T, today: Date) -> Deadline {
    let Some(due) = target.due_date() else {
        return Deadline::unknown();
    };
    let offset = due.offset_from(today);
    Deadline {
        status: classify(offset),
        label: label_for_offset(due.date(), offset),
        offset: Some(offset),
    }
}

/// Classify `target` against the local calendar date.
pub fn classify_deadline_today<T: DueDateLike>(target: T) -> Deadline {
    classify_deadline(target, dates::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    const TODAY: Date = date!(2024 - 02 - 20);

    #[test]
    fn status_thresholds() {
        assert_eq!(classify(-1), DeadlineStatus::Overdue);
        assert_eq!(classify(0), DeadlineStatus::Soon);
        assert_eq!(classify(3), DeadlineStatus::Soon);
        assert_eq!(classify(4), DeadlineStatus::Normal);
        assert_eq!(classify(30), DeadlineStatus::Normal);
    }

    #[test]
    fn due_today_is_soon() {
        let deadline = classify_deadline("2024-02-20", TODAY);
        assert_eq!(deadline.status, DeadlineStatus::Soon);
        assert_eq!(deadline.label, "Due today");
        assert_eq!(deadline.offset, Some(0));
    }

    #[test]
    fn relative_labels_pluralize() {
        assert_eq!(format_label(date!(2024 - 02 - 21), TODAY), "Due in 1 day");
        assert_eq!(format_label(date!(2024 - 02 - 22), TODAY), "Due in 2 days");
        assert_eq!(format_label(date!(2024 - 02 - 27), TODAY), "Due in 7 days");
    }

    #[test]
    fn five_days_out_is_normal_with_relative_label() {
        let deadline = classify_deadline("2024-02-25", TODAY);
        assert_eq!(deadline.status, DeadlineStatus::Normal);
        assert_eq!(deadline.label, "Due in 5 days");
    }

    #[test]
    fn past_dates_are_overdue_with_absolute_label() {
        let deadline = classify_deadline("2024-02-18", TODAY);
        assert_eq!(deadline.status, DeadlineStatus::Overdue);
        assert_eq!(deadline.label, "2/18/2024");
        assert_eq!(deadline.offset, Some(-2));
    }

    #[test]
    fn far_future_uses_absolute_label() {
        let deadline = classify_deadline(date!(2024 - 03 - 10), TODAY);
        assert_eq!(deadline.status, DeadlineStatus::Normal);
        assert_eq!(deadline.label, "3/10/2024");
    }

    #[test]
    fn timestamps_round_up_to_the_next_day() {
        let deadline = classify_deadline(datetime!(2024-02-21 18:30 UTC), TODAY);
        assert_eq!(deadline.offset, Some(2));
        assert_eq!(deadline.label, "Due in 2 days");

        let midnight = classify_deadline("2024-02-21T00:00:00Z", TODAY);
        assert_eq!(midnight.offset, Some(1));
    }

    #[test]
    fn invalid_input_degrades_to_neutral() {
        let deadline = classify_deadline("soon-ish", TODAY);
        assert_eq!(deadline, Deadline::unknown());
        assert_eq!(deadline.status, DeadlineStatus::Normal);
        assert!(deadline.label.is_empty());
        assert!(!deadline.is_known());
    }

    #[test]
    fn palettes_are_distinct_per_status() {
        let overdue = DeadlineStatus::Overdue.palette();
        let soon = DeadlineStatus::Soon.palette();
        let normal = DeadlineStatus::Normal.palette();
        assert_ne!(overdue, soon);
        assert_ne!(soon, normal);
        assert_eq!(overdue.foreground, "#B00020");
    }
}
