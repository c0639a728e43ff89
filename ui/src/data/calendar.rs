use std::collections::BTreeMap;

use time::Date;

use super::{Member, Project, Task};
use crate::core::dates::{parse_due_date, YearMonth};

/// What put an entry on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Task,
    Milestone,
    Deadline,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Task => "task",
            EventKind::Milestone => "milestone",
            EventKind::Deadline => "deadline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EventKind::Task => "calendar-event--task",
            EventKind::Milestone => "calendar-event--milestone",
            EventKind::Deadline => "calendar-event--deadline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: Date,
    pub title: String,
    pub kind: EventKind,
    /// Avatar initials, when someone owns the entry.
    pub owner: Option<String>,
}

/// Dated entries grouped by day: task due dates, project due dates and
/// member deadlines. Entries whose date does not parse are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    days: BTreeMap<Date, Vec<CalendarEvent>>,
}

impl Agenda {
    pub fn build(tasks: &[Task], projects: &[Project], members: &[Member]) -> Self {
        let mut agenda = Self::default();
        for task in tasks {
            agenda.push(
                &task.due_date,
                &task.title,
                EventKind::Task,
                Some(task.assignee.initials.clone()),
            );
        }
        for project in projects {
            agenda.push(&project.due_date, &project.title, EventKind::Milestone, None);
        }
        for member in members {
            agenda.push(
                &member.deadline,
                &member.name,
                EventKind::Deadline,
                Some(member.avatar.clone()),
            );
        }
        for events in agenda.days.values_mut() {
            events.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.title.cmp(&b.title)));
        }
        agenda
    }

    fn push(&mut self, raw: &str, title: &str, kind: EventKind, owner: Option<String>) {
        let Some(date) = parse_due_date(raw) else {
            tracing::debug!(%raw, %title, "skipping undated calendar entry");
            return;
        };
        self.days.entry(date).or_default().push(CalendarEvent {
            date,
            title: title.to_string(),
            kind,
            owner,
        });
    }

    pub fn on(&self, date: Date) -> &[CalendarEvent] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of entries falling inside `month`.
    pub fn count_in(&self, month: YearMonth) -> usize {
        self.days
            .iter()
            .filter(|(date, _)| month.contains(**date))
            .map(|(_, events)| events.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use time::macros::date;
    use time::Month;

    fn seeded() -> Agenda {
        Agenda::build(
            &mock::seed_tasks(),
            &mock::seed_projects(),
            &mock::seed_members(),
        )
    }

    #[test]
    fn groups_tasks_projects_and_deadlines_by_day() {
        let agenda = seeded();
        let day: Vec<(&str, EventKind)> = agenda
            .on(date!(2024 - 02 - 28))
            .iter()
            .map(|event| (event.title.as_str(), event.kind))
            .collect();
        assert_eq!(
            day,
            [
                ("User Testing", EventKind::Task),
                ("Marketing Campaign", EventKind::Milestone),
            ]
        );

        let deadlines = agenda.on(date!(2024 - 04 - 18));
        assert_eq!(deadlines.len(), 1);
        assert_eq!(deadlines[0].kind, EventKind::Deadline);
        assert_eq!(deadlines[0].owner.as_deref(), Some("AM"));

        assert!(agenda.on(date!(2024 - 02 - 29)).is_empty());
    }

    #[test]
    fn counts_stay_within_the_month() {
        let agenda = seeded();
        assert_eq!(agenda.count_in(YearMonth::new(2024, Month::February)), 3);
        assert_eq!(agenda.count_in(YearMonth::new(2024, Month::April)), 5);
        assert_eq!(agenda.count_in(YearMonth::new(2025, Month::February)), 0);
    }

    #[test]
    fn unparseable_dates_are_left_out() {
        let mut tasks = mock::seed_tasks();
        tasks.truncate(1);
        tasks[0].due_date = "someday".into();
        let agenda = Agenda::build(&tasks, &[], &[]);
        assert!(agenda.is_empty());
    }
}
