use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

use super::{mock, Member, Priority, Task, TaskStatus};
use crate::core::dates::{iso_date, parse_due_date};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("no task with id {0}")]
    UnknownTask(u32),

    #[error("no team member with id {0}")]
    UnknownMember(u32),

    #[error("`{0}` is not a valid date")]
    InvalidDate(String),
}

/// Task board filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
            && self
                .project
                .as_deref()
                .map_or(true, |project| task.project == project)
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.project.is_none()
    }
}

fn validated_date(raw: &str) -> Result<Date, TaskError> {
    parse_due_date(raw).ok_or_else(|| TaskError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Board pre-filled with the demo tasks.
    pub fn seeded() -> Self {
        Self::new(mock::seed_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Distinct project names in board order.
    pub fn projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = Vec::new();
        for task in &self.tasks {
            if !projects.contains(&task.project) {
                projects.push(task.project.clone());
            }
        }
        projects
    }

    pub fn filtered(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    pub fn count_with_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|task| task.status == status).count()
    }

    /// Open tasks ordered by due date; unparseable dates sort last.
    pub fn upcoming(&self, limit: usize) -> Vec<&Task> {
        let mut open: Vec<(Option<Date>, &Task)> = self
            .tasks
            .iter()
            .filter(|task| !task.is_completed())
            .map(|task| (parse_due_date(&task.due_date), task))
            .collect();
        open.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        open.into_iter().take(limit).map(|(_, task)| task).collect()
    }

    /// Store a new due date, normalized to `YYYY-MM-DD`.
    pub fn update_due_date(&mut self, id: u32, raw: &str) -> Result<&Task, TaskError> {
        let date = validated_date(raw)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::UnknownTask(id))?;
        task.due_date = iso_date(date);
        tracing::debug!(task = id, due = %task.due_date, "task due date updated");
        Ok(task)
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Team members with editable personal deadlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn seeded() -> Self {
        Self::new(mock::seed_members())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn update_deadline(&mut self, id: u32, raw: &str) -> Result<&Member, TaskError> {
        let date = validated_date(raw)?;
        let member = self
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(TaskError::UnknownMember(id))?;
        member.deadline = iso_date(date);
        tracing::debug!(member = id, due = %member.deadline, "member deadline updated");
        Ok(member)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_everything() {
        let board = TaskBoard::seeded();
        assert_eq!(board.filtered(&TaskFilter::default()).len(), board.tasks().len());
    }

    #[test]
    fn filters_combine() {
        let board = TaskBoard::seeded();
        let filter = TaskFilter {
            project: Some("Mobile App".into()),
            ..TaskFilter::default()
        };
        let titles: Vec<&str> = board
            .filtered(&filter)
            .iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(titles, ["Design System Update", "User Testing"]);

        let filter = TaskFilter {
            project: Some("Mobile App".into()),
            priority: Some(Priority::Low),
            status: None,
        };
        assert_eq!(board.filtered(&filter).len(), 1);

        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            priority: Some(Priority::High),
            project: None,
        };
        assert!(board.filtered(&filter).is_empty());
    }

    #[test]
    fn update_due_date_normalizes_input() {
        let mut board = TaskBoard::seeded();
        let task = board.update_due_date(2, "2024-03-12T09:30:00Z").unwrap();
        assert_eq!(task.due_date, "2024-03-12");
        assert_eq!(board.get(2).map(|t| t.due_date.as_str()), Some("2024-03-12"));
    }

    #[test]
    fn update_due_date_rejects_bad_input() {
        let mut board = TaskBoard::seeded();
        assert_eq!(
            board.update_due_date(99, "2024-03-12"),
            Err(TaskError::UnknownTask(99))
        );
        assert_eq!(
            board.update_due_date(1, "next week"),
            Err(TaskError::InvalidDate("next week".into()))
        );
        assert_eq!(board.get(1).map(|t| t.due_date.as_str()), Some("2024-02-25"));
    }

    #[test]
    fn upcoming_skips_completed_and_sorts_by_date() {
        let board = TaskBoard::seeded();
        let ids: Vec<u32> = board.upcoming(10).iter().map(|task| task.id).collect();
        assert_eq!(ids, [1, 3, 2]);
        assert_eq!(board.upcoming(1).len(), 1);
    }

    #[test]
    fn projects_are_distinct() {
        let board = TaskBoard::seeded();
        assert_eq!(
            board.projects(),
            ["Mobile App", "Backend Services", "Knowledge Base"]
        );
    }

    #[test]
    fn roster_deadline_updates() {
        let mut roster = Roster::seeded();
        let member = roster.update_deadline(1, "2024-05-01").unwrap();
        assert_eq!(member.deadline, "2024-05-01");
        assert_eq!(
            roster.update_deadline(42, "2024-05-01"),
            Err(TaskError::UnknownMember(42))
        );
    }
}
