//! Shared UI crate for Volara. Domain logic, chart geometry and every view
//! live here; the `web` and `desktop` crates only wire up routing and storage.

pub mod charts;
pub mod components;
pub mod core;
pub mod data;
pub mod export;
pub mod i18n;
pub mod state;
pub mod views;
