//! tv-sim: a simulated television with a TUI remote control.

pub mod report;
pub mod script;
pub mod tui;
pub mod tv;
pub mod types;
