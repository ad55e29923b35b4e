//! Pure TUI transitions: (App, UiAction) → App.
//!
//! Fully testable without a terminal. Remote gestures are forwarded to the
//! TV core; the only UI-owned logic here is the slider widget — drags move
//! its handle and feed the new position to the TV as the slider event, and
//! after every action the handle re-syncs to the TV volume while the slider
//! is enabled (the original UI's setValue-after-change behavior).

use crate::types::TvAction;

use super::state::{App, UiAction};

/// Apply one semantic action to the app.
pub fn update(app: &mut App, action: UiAction) {
    match action {
        UiAction::Quit => {
            app.should_quit = true;
            return;
        }
        UiAction::Tv(tv_action) => {
            app.tv.apply(tv_action);
        }
        UiAction::SliderLeft => {
            // Dragging a disabled slider does nothing, handle included.
            if app.tv.slider_enabled() && app.slider_pos > app.tv.limits().min_volume {
                let target = app.slider_pos - 1;
                app.tv.apply(TvAction::SetVolume(target));
            }
        }
        UiAction::SliderRight => {
            if app.tv.slider_enabled() && app.slider_pos < app.tv.limits().max_volume {
                let target = app.slider_pos + 1;
                app.tv.apply(TvAction::SetVolume(target));
            }
        }
    }

    sync_slider(app);
}

/// Re-sync the slider handle with the TV volume while the slider accepts
/// input. While muted (or off) the handle stays where it was, matching a
/// grayed-out physical slider.
fn sync_slider(app: &mut App) {
    if app.tv.slider_enabled() {
        app.slider_pos = app.tv.volume();
    }
}

// ============================================================================
// TESTS
// ============================================================================
