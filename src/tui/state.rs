//! TUI state: pure types, zero effects.
//!
//! The TV itself is the real model; `App` only adds what the terminal UI
//! needs on top — the slider widget's position and the quit flag. The
//! transition function (`update`) and rendering layer (`view`) both program
//! against these types.

use crate::tv::Tv;
use crate::types::TvAction;

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// The set being remote-controlled.
    pub tv: Tv,
    /// Where the on-screen slider handle sits. Mirrors the TV volume after
    /// every action while the slider is enabled; frozen while it is not.
    pub slider_pos: u8,
    /// Set when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// A powered-off set with the slider at the bottom.
    pub fn new() -> Self {
        let tv = Tv::default();
        let slider_pos = tv.volume();
        App {
            tv,
            slider_pos,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to these; the transition function
/// decides what each one means. Remote gestures embed [`TvAction`]
/// directly — the UI adds only the gestures the TV core never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A remote-control button press, forwarded to the TV.
    Tv(TvAction),
    /// Drag the slider handle one step left (quieter).
    SliderLeft,
    /// Drag the slider handle one step right (louder).
    SliderRight,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_is_off_and_running() {
        let app = App::new();
        assert!(!app.tv.is_on());
        assert_eq!(app.slider_pos, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn ui_actions_are_matchable() {
        assert_eq!(
            UiAction::Tv(TvAction::PowerToggle),
            UiAction::Tv(TvAction::PowerToggle)
        );
        assert_ne!(UiAction::SliderLeft, UiAction::SliderRight);
    }
}
