//! TUI module for the interactive remote.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, UiAction)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects boundary (terminal, key events)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
