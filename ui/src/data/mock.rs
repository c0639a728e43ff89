//! Demo data used until a backend exists.

use super::{
    Assignee, Member, MonthlyCompletion, Priority, Project, ProjectStatus, ReportRange, Task,
    TaskStatus, TeamPerformance,
};
use crate::charts::{ChartSeries, PieSlice, Sample};

pub const PRODUCTIVE_COLOR: &str = "#4CAF50";
pub const COMPLETION_COLOR: &str = "#2196F3";

const WEEKDAYS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const OVERVIEW_X: [f64; 6] = [40.0, 180.0, 320.0, 460.0, 600.0, 760.0];
const PRODUCTIVE: [f64; 6] = [56.0, 65.0, 45.0, 70.0, 56.0, 60.0];
const COMPLETION: [f64; 6] = [22.0, 30.0, 15.0, 35.0, 22.0, 25.0];

const TEAM_COLORS: [&str; 4] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0"];

#[allow(clippy::too_many_arguments)]
fn task(
    id: u32,
    title: &str,
    project: &str,
    assignee: &str,
    due_date: &str,
    priority: Priority,
    status: TaskStatus,
    progress: u8,
) -> Task {
    Task {
        id,
        title: title.into(),
        project: project.into(),
        assignee: Assignee::new(assignee),
        due_date: due_date.into(),
        priority,
        status,
        progress,
    }
}

pub fn seed_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Design System Update",
            "Mobile App",
            "Alice Miller",
            "2024-02-25",
            Priority::High,
            TaskStatus::InProgress,
            65,
        ),
        task(
            2,
            "API Integration",
            "Backend Services",
            "Robert Brown",
            "2024-03-10",
            Priority::Medium,
            TaskStatus::Todo,
            0,
        ),
        task(
            3,
            "User Testing",
            "Mobile App",
            "John Doe",
            "2024-02-28",
            Priority::Low,
            TaskStatus::Review,
            90,
        ),
        task(
            4,
            "Documentation",
            "Knowledge Base",
            "Emma Wilson",
            "2024-03-15",
            Priority::Medium,
            TaskStatus::Completed,
            100,
        ),
    ]
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    progress: u8,
    status: ProjectStatus,
    team: (u32, u32),
    due_date: &str,
) -> Project {
    let (members, tasks) = team;
    Project {
        id,
        title: title.into(),
        description: description.into(),
        progress,
        status,
        members,
        tasks,
        due_date: due_date.into(),
        highlights: Vec::new(),
        budget: None,
        sponsors: None,
    }
}

pub fn seed_projects() -> Vec<Project> {
    let mut launch = project(
        4,
        "Product Launch",
        "Prepare and execute the new product launch event. Coordinate with marketing, sales \
         and product teams. Finalize the guest list and press releases, then monitor launch \
         KPIs and gather feedback.",
        45,
        ProjectStatus::InProgress,
        (6, 20),
        "2024-05-01",
    );
    launch.highlights = [
        "Venue booked",
        "Press kit ready",
        "Demo scheduled",
        "Social media campaign live",
        "VIP invitations sent",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    launch.budget = Some("$15,000".into());
    launch.sponsors = Some(3);

    vec![
        project(
            1,
            "Mobile App Redesign",
            "Redesign the mobile app interface for better user experience",
            75,
            ProjectStatus::InProgress,
            (5, 12),
            "2024-03-15",
        ),
        project(
            2,
            "Website Development",
            "Create a new company website with modern technologies",
            30,
            ProjectStatus::Planning,
            (4, 8),
            "2024-04-01",
        ),
        project(
            3,
            "Marketing Campaign",
            "Launch Q1 marketing campaign across social media",
            90,
            ProjectStatus::Review,
            (3, 15),
            "2024-02-28",
        ),
        launch,
    ]
}

fn member(
    id: u32,
    name: &str,
    role: &str,
    stats: (u8, u32, u32),
    projects: &[&str],
    deadline: &str,
) -> Member {
    let (performance, tasks_completed, tasks_ongoing) = stats;
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Member {
        id,
        name: name.into(),
        role: role.into(),
        email,
        avatar: crate::core::format::initials(name),
        performance,
        tasks_completed,
        tasks_ongoing,
        projects: projects.iter().map(|p| p.to_string()).collect(),
        deadline: deadline.into(),
    }
}

pub fn seed_members() -> Vec<Member> {
    vec![
        member(
            1,
            "John Doe",
            "Project Manager",
            (85, 45, 8),
            &["Mobile App", "Website Redesign"],
            "2024-04-20",
        ),
        member(
            2,
            "Alice Miller",
            "UI/UX Designer",
            (92, 38, 5),
            &["Mobile App", "Brand Guidelines"],
            "2024-04-18",
        ),
        member(
            3,
            "Robert Brown",
            "Frontend Developer",
            (78, 52, 6),
            &["Website Redesign", "Customer Portal"],
            "2024-04-25",
        ),
        member(
            4,
            "Emma Wilson",
            "Backend Developer",
            (88, 41, 4),
            &["API Integration", "Database Migration"],
            "2024-04-16",
        ),
    ]
}

fn overview_series(name: &str, color: &str, values: [f64; 6]) -> ChartSeries {
    let samples = OVERVIEW_X
        .into_iter()
        .zip(values)
        .zip(WEEKDAYS)
        .map(|((x, y), label)| Sample::new(x, y, label))
        .collect();
    ChartSeries::new(name, color, samples)
}

/// Productive and completion percentages for the dashboard overview.
pub fn work_overview() -> Vec<ChartSeries> {
    vec![
        overview_series("Productive", PRODUCTIVE_COLOR, PRODUCTIVE),
        overview_series("Completion", COMPLETION_COLOR, COMPLETION),
    ]
}

fn completion(rows: &[(&str, u32, u32)]) -> Vec<MonthlyCompletion> {
    rows.iter()
        .map(|&(month, completed, total)| MonthlyCompletion {
            month: month.into(),
            completed,
            total,
        })
        .collect()
}

/// Completion counts for the selected report window.
pub fn completion_by_range(range: ReportRange) -> Vec<MonthlyCompletion> {
    match range {
        ReportRange::Week => completion(&[
            ("Mon", 8, 10),
            ("Tue", 9, 12),
            ("Wed", 7, 9),
            ("Thu", 11, 14),
            ("Fri", 10, 11),
        ]),
        ReportRange::Month => completion(&[
            ("Jan", 45, 60),
            ("Feb", 38, 45),
            ("Mar", 52, 65),
            ("Apr", 42, 50),
            ("May", 48, 55),
            ("Jun", 55, 70),
        ]),
        ReportRange::Year => completion(&[
            ("2021", 410, 560),
            ("2022", 465, 590),
            ("2023", 520, 640),
            ("2024", 280, 345),
        ]),
    }
}

/// Completion rate per period as a chart series.
pub fn completion_series(rows: &[MonthlyCompletion]) -> ChartSeries {
    let samples = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| Sample::new(idx as f64, row.rate(), row.month.clone()))
        .collect();
    ChartSeries::new("Completion rate", COMPLETION_COLOR, samples)
}

pub fn team_performance() -> Vec<TeamPerformance> {
    [
        ("Design Team", 85, 12, 8),
        ("Development Team", 72, 18, 15),
        ("Marketing Team", 90, 5, 10),
        ("Sales Team", 68, 22, 12),
    ]
    .into_iter()
    .map(|(team, completed, ongoing, upcoming)| TeamPerformance {
        team: team.into(),
        completed,
        ongoing,
        upcoming,
    })
    .collect()
}

/// Completed work per team, for the reports pie.
pub fn team_slices(teams: &[TeamPerformance]) -> Vec<PieSlice> {
    teams
        .iter()
        .zip(TEAM_COLORS.iter().cycle())
        .map(|(team, color)| PieSlice::new(team.team.clone(), f64::from(team.completed), *color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_matches_dashboard_figures() {
        let series = work_overview();
        assert_eq!(series.len(), 2);
        let productive = &series[0];
        assert_eq!(productive.samples[1].label, "Tue");
        assert_eq!(productive.samples[1].y, 65.0);
        assert_eq!(productive.samples.first().map(|s| s.x), Some(40.0));
        assert_eq!(productive.samples.last().map(|s| s.x), Some(760.0));
    }

    #[test]
    fn every_range_has_data() {
        for range in ReportRange::ALL {
            let rows = completion_by_range(range);
            assert!(!rows.is_empty(), "{range:?}");
            assert!(rows.iter().all(|row| row.completed <= row.total));
        }
    }

    #[test]
    fn members_get_addresses_and_avatars() {
        let members = seed_members();
        assert_eq!(members[1].email, "alice.miller@example.com");
        assert_eq!(members[1].avatar, "AM");
    }
}
