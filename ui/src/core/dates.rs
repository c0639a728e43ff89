//! Calendar arithmetic for due dates.
//!
//! Everything here is pure except [`today`], which reads the wall clock. Due
//! dates travel through the app as ISO strings (`2024-02-25`), so the parsing
//! helpers are deliberately forgiving: anything unparseable becomes `None` and
//! the classifier downstream falls back to a neutral rendering.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, util, Date, Month,
    OffsetDateTime, Time,
};

const MILLIS_PER_DAY: i128 = 86_400_000;

/// Whole calendar days from `today` to `target`.
///
/// Same day is `0`, tomorrow `1`, yesterday `-1`.
pub fn day_offset(target: Date, today: Date) -> i64 {
    (target - today).whole_days()
}

/// Day offset for a timestamped target.
///
/// `now` is first normalized to its own midnight; the remaining difference is
/// rounded up. Today's midnight is `0`, anything after it up to and including
/// tomorrow's midnight is `1`.
pub fn day_offset_at(target: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let midnight = now.replace_time(Time::MIDNIGHT);
    let millis = (target - midnight).whole_milliseconds();
    ceil_div(millis, MILLIS_PER_DAY) as i64
}

fn ceil_div(value: i128, divisor: i128) -> i128 {
    // Integer division truncates toward zero, which already is the ceiling for negatives.
    let quotient = value / divisor;
    if value % divisor > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// A due date as entered: a calendar day or an exact instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Day(Date),
    At(OffsetDateTime),
}

impl DueDate {
    pub fn date(&self) -> Date {
        match self {
            DueDate::Day(date) => *date,
            DueDate::At(instant) => instant.date(),
        }
    }

    /// Days until this due date. Instants count from `today`'s midnight in
    /// their own offset and round up, see [`day_offset_at`].
    pub fn offset_from(&self, today: Date) -> i64 {
        match self {
            DueDate::Day(date) => day_offset(*date, today),
            DueDate::At(instant) => {
                day_offset_at(*instant, today.midnight().assume_offset(instant.offset()))
            }
        }
    }
}

/// Parse `YYYY-MM-DD` as a day or an RFC 3339 timestamp as an instant.
pub fn parse_due(raw: &str) -> Option<DueDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Date::parse(trimmed, &format_description!("[year]-[month]-[day]"))
        .map(DueDate::Day)
        .ok()
        .or_else(|| OffsetDateTime::parse(trimmed, &Rfc3339).ok().map(DueDate::At))
}

/// Calendar day of a due date from `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_due_date(raw: &str) -> Option<Date> {
    parse_due(raw).map(|due| due.date())
}

/// ISO representation used by the task board and the date input.
pub fn iso_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Local calendar date, or the UTC date when the local offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// A calendar month, the page unit of the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn of(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn first_day(&self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    pub fn days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self::new(self.year + 1, Month::January),
            month => Self::new(self.year, month.next()),
        }
    }

    pub fn previous(self) -> Self {
        match self.month {
            Month::January => Self::new(self.year - 1, Month::December),
            month => Self::new(self.year, month.previous()),
        }
    }

    /// Header label such as `February 2024`.
    pub fn label(&self) -> String {
        self.first_day()
            .and_then(|first| {
                first
                    .format(&format_description!("[month repr:long] [year]"))
                    .ok()
            })
            .unwrap_or_else(|| format!("{} {}", self.month, self.year))
    }
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    util::days_in_year_month(year, month)
}

/// Cells of a Sunday-first month view.
///
/// Blanks (`None`) pad the week before the 1st and after the last day, so the
/// length is always a multiple of seven.
pub fn month_grid(month: YearMonth) -> Vec<Option<Date>> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let leading = usize::from(first.weekday().number_days_from_sunday());
    let mut cells = vec![None; leading];
    cells.extend(
        (1..=month.days())
            .filter_map(|day| Date::from_calendar_date(month.year, month.month, day).ok())
            .map(Some),
    );
    let weeks = cells.len().div_ceil(7);
    cells.resize(weeks * 7, None);
    cells
}

/// Anything that can stand in for a due date.
///
/// `None` from [`DueDateLike::due_date`] is the "invalid date" case.
pub trait DueDateLike {
    fn due_date(&self) -> Option<DueDate>;
}

impl DueDateLike for DueDate {
    fn due_date(&self) -> Option<DueDate> {
        Some(*self)
    }
}

impl DueDateLike for Date {
    fn due_date(&self) -> Option<DueDate> {
        Some(DueDate::Day(*self))
    }
}

impl DueDateLike for OffsetDateTime {
    fn due_date(&self) -> Option<DueDate> {
        Some(DueDate::At(*self))
    }
}

impl DueDateLike for Option<Date> {
    fn due_date(&self) -> Option<DueDate> {
        self.map(DueDate::Day)
    }
}

impl DueDateLike for str {
    fn due_date(&self) -> Option<DueDate> {
        parse_due(self)
    }
}

impl DueDateLike for String {
    fn due_date(&self) -> Option<DueDate> {
        parse_due(self)
    }
}

impl<T: DueDateLike + ?Sized> DueDateLike for &T {
    fn due_date(&self) -> Option<DueDate> {
        (**self).due_date()
    }
}
