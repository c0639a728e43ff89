mod calendar;
pub use calendar::Calendar;

mod dashboard;
pub use dashboard::Dashboard;

mod projects;
pub use projects::Projects;

mod tasks;
pub use tasks::Tasks;

mod reports;
pub use reports::{summarize, Reports, ReportSummary};

mod team;
pub use team::Team;
