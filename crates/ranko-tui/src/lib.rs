// Terminal UI implementation using ratatui
// Three pickers behind tabs, all driven by ranko-core state

pub mod app;
pub mod runner;
pub mod ui;
mod category_ui;
mod filter_ui;
mod help_ui;
mod layout_ui;

pub use app::{App, InputMode, Outcome, Screen};
pub use runner::run_tui;
