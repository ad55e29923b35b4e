//! TUI color semantics and style constants.
//!
//! Centralized theme definitions — pure data, consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - White on black: the screen itself (channel cards, off screen)
//! - Green: the volume LCD (classic seven-segment green)
//! - Red: mute indicator, and the Netflix brand card
//! - Cyan: keybinding hints and the slider handle
//! - Dim: chrome, disabled slider, de-emphasized metadata

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SCREEN STYLES
// ============================================================================

/// Channel card headline (station name).
pub const STYLE_STATION: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The big channel number next to the station name.
pub const STYLE_CHANNEL_NUMBER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Powered-off screen text.
pub const STYLE_OFF: Style = Style::new().fg(Color::DarkGray);

/// Guide listing rows.
pub const STYLE_GUIDE_ROW: Style = Style::new().fg(Color::White);

/// Guide row for the channel the set will return to on exit.
pub const STYLE_GUIDE_CURRENT: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

// ============================================================================
// BRAND CARDS
// ============================================================================

/// Netflix card.
pub const STYLE_NETFLIX: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Hulu card.
pub const STYLE_HULU: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Disney+ card.
pub const STYLE_DISNEY: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

// ============================================================================
// REMOTE PANEL
// ============================================================================

/// Volume LCD digits.
pub const STYLE_LCD: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Mute indicator on the LCD.
pub const STYLE_MUTED: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Slider track and handle while enabled.
pub const STYLE_SLIDER: Style = Style::new().fg(Color::Cyan);

/// Slider while disabled (muted or off).
pub const STYLE_SLIDER_DISABLED: Style = Style::new().fg(Color::DarkGray);

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Keybinding hint inside other text.
pub const STYLE_KEY: Style = Style::new().fg(Color::Cyan);

// ============================================================================
// TESTS
// ============================================================================
