//! Platform-agnostic building blocks shared by every view.

pub mod dates;
pub mod deadline;
pub mod format;
pub mod preferences;
pub mod storage;
