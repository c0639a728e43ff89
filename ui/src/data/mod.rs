//! Domain records shown by the dashboard: tasks, projects, team members and
//! report aggregates. Everything here lives in memory for the session.

mod calendar;
pub mod mock;
mod tasks;

pub use calendar::{Agenda, CalendarEvent, EventKind};
pub use tasks::{Roster, TaskBoard, TaskError, TaskFilter};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::core::deadline::{classify_deadline, Deadline};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::High => "chip--priority-high",
            Priority::Medium => "chip--priority-medium",
            Priority::Low => "chip--priority-low",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "chip--status-todo",
            TaskStatus::InProgress => "chip--status-progress",
            TaskStatus::Review => "chip--status-review",
            TaskStatus::Completed => "chip--status-completed",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub initials: String,
}

impl Assignee {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = crate::core::format::initials(&name);
        Self { name, initials }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub project: String,
    pub assignee: Assignee,
    /// ISO `YYYY-MM-DD`.
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Percent complete, `0..=100`.
    pub progress: u8,
}

impl Task {
    pub fn deadline(&self, today: Date) -> Deadline {
        classify_deadline(self.due_date.as_str(), today)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Review,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Review,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Review => "Review",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "chip--status-planning",
            ProjectStatus::InProgress => "chip--status-progress",
            ProjectStatus::Review => "chip--status-review",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub status: ProjectStatus,
    pub members: u32,
    pub tasks: u32,
    /// ISO `YYYY-MM-DD`.
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<u32>,
}

impl Project {
    pub fn deadline(&self, today: Date) -> Deadline {
        classify_deadline(self.due_date.as_str(), today)
    }

    /// Case-insensitive match on title or description. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Projects matching `query` and, when set, `status`.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    status: Option<ProjectStatus>,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| status.map_or(true, |wanted| project.status == wanted))
        .filter(|project| project.matches(query))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub avatar: String,
    pub performance: u8,
    pub tasks_completed: u32,
    pub tasks_ongoing: u32,
    pub projects: Vec<String>,
    /// ISO `YYYY-MM-DD`.
    pub deadline: String,
}

impl Member {
    pub fn deadline(&self, today: Date) -> Deadline {
        classify_deadline(self.deadline.as_str(), today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPerformance {
    pub team: String,
    pub completed: u32,
    pub ongoing: u32,
    pub upcoming: u32,
}

impl TeamPerformance {
    pub fn total(&self) -> u32 {
        self.completed + self.ongoing + self.upcoming
    }

    /// Completed share of all work, rounded to a whole percent.
    pub fn efficiency(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => (f64::from(self.completed) / f64::from(total) * 100.0).round() as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCompletion {
    pub month: String,
    pub completed: u32,
    pub total: u32,
}

impl MonthlyCompletion {
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total) * 100.0
        }
    }
}

/// Time window of the reports page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportRange {
    Week,
    #[default]
    Month,
    Year,
}

impl ReportRange {
    pub const ALL: [ReportRange; 3] = [ReportRange::Week, ReportRange::Month, ReportRange::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRange::Week => "week",
            ReportRange::Month => "month",
            ReportRange::Year => "year",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_rounds_completed_share() {
        let design = TeamPerformance {
            team: "Design Team".into(),
            completed: 85,
            ongoing: 12,
            upcoming: 8,
        };
        assert_eq!(design.efficiency(), 81);

        let idle = TeamPerformance {
            team: "Idle".into(),
            completed: 0,
            ongoing: 0,
            upcoming: 0,
        };
        assert_eq!(idle.efficiency(), 0);
    }

    #[test]
    fn completion_rate_handles_empty_months() {
        let jan = MonthlyCompletion {
            month: "Jan".into(),
            completed: 45,
            total: 60,
        };
        assert_eq!(jan.rate(), 75.0);
        let empty = MonthlyCompletion {
            month: "Feb".into(),
            completed: 0,
            total: 0,
        };
        assert_eq!(empty.rate(), 0.0);
    }

    #[test]
    fn labels_parse_back() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(Priority::from_label("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::from_label("all"), None);
    }

    #[test]
    fn project_search_ignores_case_and_blank_queries() {
        let projects = mock::seed_projects();
        let hits = filter_projects(&projects, "  MOBILE ", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mobile App Redesign");

        // Matches the description only.
        let hits = filter_projects(&projects, "social media", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Marketing Campaign");

        assert_eq!(filter_projects(&projects, "", None).len(), projects.len());
        assert!(filter_projects(&projects, "nothing like this", None).is_empty());
    }

    #[test]
    fn project_status_filter_combines_with_search() {
        let projects = mock::seed_projects();
        let in_progress = filter_projects(&projects, "", Some(ProjectStatus::InProgress));
        assert_eq!(in_progress.len(), 2);
        let launch = filter_projects(&projects, "launch", Some(ProjectStatus::InProgress));
        assert_eq!(launch.len(), 1);
        assert!(filter_projects(&projects, "launch", Some(ProjectStatus::Planning)).is_empty());
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn assignee_initials_from_name() {
        assert_eq!(Assignee::new("Alice Miller").initials, "AM");
    }
}
