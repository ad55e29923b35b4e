//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers. There is no
//! background work in this domain, so the loop simply blocks on the next
//! terminal event.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::types::{StreamingService, TvAction};

use super::state::{App, UiAction};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic action.
///
/// Returns None for keys that don't map to any action. This is the entire
/// input layer: one gesture, one action, no logic.
pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiAction::Quit);
    }

    match key.code {
        KeyCode::Char('p') => Some(UiAction::Tv(TvAction::PowerToggle)),

        // Numbered channel buttons
        KeyCode::Char(c @ '1'..='9') => {
            Some(UiAction::Tv(TvAction::SetChannel(c as u8 - b'0')))
        }

        // Channel surfing
        KeyCode::Up | KeyCode::Char('k') => Some(UiAction::Tv(TvAction::ChannelUp)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiAction::Tv(TvAction::ChannelDown)),

        // Volume buttons
        KeyCode::Char('+') | KeyCode::Char('=') => Some(UiAction::Tv(TvAction::VolumeUp)),
        KeyCode::Char('-') => Some(UiAction::Tv(TvAction::VolumeDown)),
        KeyCode::Char('m') => Some(UiAction::Tv(TvAction::Mute)),

        // Slider drags
        KeyCode::Left => Some(UiAction::SliderLeft),
        KeyCode::Right => Some(UiAction::SliderRight),

        // Guide and streaming
        KeyCode::Char('g') => Some(UiAction::Tv(TvAction::Guide)),
        KeyCode::Esc | KeyCode::Char('e') => Some(UiAction::Tv(TvAction::ExitAux)),
        KeyCode::Char('n') => Some(UiAction::Tv(TvAction::Stream(StreamingService::Netflix))),
        KeyCode::Char('h') => Some(UiAction::Tv(TvAction::Stream(StreamingService::Hulu))),
        KeyCode::Char('d') => {
            Some(UiAction::Tv(TvAction::Stream(StreamingService::DisneyPlus)))
        }

        KeyCode::Char('q') => Some(UiAction::Quit),

        _ => None,
    }
}

/// The key bindings as (key, meaning) pairs, for `tv-sim keys`.
pub fn bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("p", "power on/off"),
        ("1-9", "channel buttons"),
        ("Up / k", "channel up"),
        ("Down / j", "channel down"),
        ("+ / =", "volume up"),
        ("-", "volume down"),
        ("m", "mute"),
        ("Left / Right", "volume slider"),
        ("g", "TV guide"),
        ("e / Esc", "exit guide or streaming"),
        ("n", "Netflix"),
        ("h", "Hulu"),
        ("d", "Disney+"),
        ("q / Ctrl-C", "quit"),
    ]
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive remote until the user quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    update(&mut app, action);
                }
            }
            _ => {} // ignore mouse, resize, etc.
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
