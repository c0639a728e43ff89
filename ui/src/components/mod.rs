pub mod app_navbar;
mod deadline_chip;
mod edit_deadline_dialog;
mod export_panel;

pub use app_navbar::{register_nav, AppNavbar, NavBuilder, THEME_CSS};
pub use deadline_chip::DeadlineChip;
pub use edit_deadline_dialog::EditDeadlineDialog;
pub use export_panel::ExportPanel;
