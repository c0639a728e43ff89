//! Formatting helpers for presenting dashboard figures.

use time::{macros::format_description, Date};

/// Placeholder for figures that cannot be shown.
pub const NOT_AVAILABLE: &str = "n/a";

/// Whole-number percentage, e.g. `56%`. Non-finite input renders as `n/a`.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.0}%")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// `completed/total` counter used by the performance summary.
pub fn format_ratio(completed: u32, total: u32) -> String {
    format!("{completed}/{total}")
}

/// Header date such as `Tuesday, February 20, 2024`.
pub fn format_long_date(date: Date) -> String {
    date.format(&format_description!(
        "[weekday], [month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| NOT_AVAILABLE.to_string())
}

/// Two-letter initials for avatar bubbles.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn percent_rounds_and_guards_nan() {
        assert_eq!(format_percent(56.4), "56%");
        assert_eq!(format_percent(84.6), "85%");
        assert_eq!(format_percent(f64::NAN), "n/a");
        assert_eq!(format_percent(f64::INFINITY), NOT_AVAILABLE);
    }

    #[test]
    fn long_date_reads_naturally() {
        assert_eq!(
            format_long_date(date!(2024 - 02 - 20)),
            "Tuesday, February 20, 2024"
        );
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Alice Miller"), "AM");
        assert_eq!(initials("emma rose wilson"), "ER");
        assert_eq!(initials(""), "");
    }
}
