//! Pure rendering: map App state to ratatui widget trees.
//!
//! The display area dispatches on the TV's display index, the single
//! output any presentation layer consumes. Below it sits the remote
//! panel: volume LCD, slider gauge, channel indicator. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! `Frame::render_widget()` which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tv::Tv;
use crate::types::{channel_name, StreamingService};

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole UI to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),   // the screen
        Constraint::Length(4), // remote panel
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_screen(&app.tv, frame, chunks[1]);
    render_remote_panel(app, frame, chunks[2]);
    frame.render_widget(render_help(&app.tv), chunks[3]);
}

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Span::styled("tv-sim", theme::STYLE_TITLE))
}

/// The screen area: whatever the display index selects.
fn render_screen(tv: &Tv, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match tv.display_index() {
        0 => render_off(frame, inner),
        idx @ 1..=9 => render_channel(idx, frame, inner),
        10 => render_streaming(StreamingService::Netflix, frame, inner),
        11 => render_streaming(StreamingService::Hulu, frame, inner),
        12 => render_streaming(StreamingService::DisneyPlus, frame, inner),
        _ => render_guide(tv, frame, inner),
    }
}

// ============================================================================
// SCREEN: OFF
// ============================================================================

fn render_off(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("          ·", theme::STYLE_OFF)),
        Line::from(""),
        Line::from(Span::styled("   press [p] to power on", theme::STYLE_OFF)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SCREEN: CHANNEL
// ============================================================================

fn render_channel(channel: u8, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("{:>2}", channel), theme::STYLE_CHANNEL_NUMBER),
            Span::raw("  "),
            Span::styled(channel_name(channel), theme::STYLE_STATION),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "   ────────────────────────────",
            theme::STYLE_OFF,
        )),
        Line::from(Span::styled("   now showing", theme::STYLE_OFF)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// SCREEN: STREAMING
// ============================================================================

fn render_streaming(service: StreamingService, frame: &mut Frame, area: Rect) {
    let style = match service {
        StreamingService::Netflix => theme::STYLE_NETFLIX,
        StreamingService::Hulu => theme::STYLE_HULU,
        StreamingService::DisneyPlus => theme::STYLE_DISNEY,
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::raw("        "),
            Span::styled(service.label().to_uppercase(), style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "        press [e] to return to TV",
            theme::STYLE_OFF,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SCREEN: GUIDE
// ============================================================================

fn render_guide(tv: &Tv, frame: &mut Frame, area: Rect) {
    let limits = tv.limits();
    let mut lines = vec![
        Line::from(Span::styled("  TV Guide", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    for channel in limits.min_channel..=limits.max_channel {
        let row = format!("   {:>2}  {}", channel, channel_name(channel));
        let style = if channel == tv.channel() {
            theme::STYLE_GUIDE_CURRENT
        } else {
            theme::STYLE_GUIDE_ROW
        };
        lines.push(Line::from(Span::styled(row, style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "   [e] back to current channel",
        theme::STYLE_OFF,
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// REMOTE PANEL
// ============================================================================

fn render_remote_panel(app: &App, frame: &mut Frame, area: Rect) {
    let tv = &app.tv;

    let volume_line = if !tv.is_on() {
        Line::from(Span::styled("  VOL  --", theme::STYLE_OFF))
    } else if tv.is_muted() {
        Line::from(vec![
            Span::styled("  VOL ", theme::STYLE_OFF),
            Span::styled("MUTED", theme::STYLE_MUTED),
        ])
    } else {
        Line::from(vec![
            Span::styled("  VOL ", theme::STYLE_OFF),
            Span::styled(format!("{:>2}", tv.volume()), theme::STYLE_LCD),
        ])
    };

    let slider_style = if tv.slider_enabled() {
        theme::STYLE_SLIDER
    } else {
        theme::STYLE_SLIDER_DISABLED
    };
    let slider_line = Line::from(vec![
        Span::styled("  ", theme::STYLE_OFF),
        Span::styled(
            slider_gauge(app.slider_pos, tv.limits().max_volume),
            slider_style,
        ),
    ]);

    let channel_line = if tv.is_on() {
        Line::from(vec![
            Span::styled("  CH  ", theme::STYLE_OFF),
            Span::styled(format!("{}", tv.channel()), theme::STYLE_LCD),
            Span::styled(
                format!("  {}", channel_name(tv.channel())),
                theme::STYLE_OFF,
            ),
        ])
    } else {
        Line::from(Span::styled("  CH  --", theme::STYLE_OFF))
    };

    let lines = vec![volume_line, slider_line, channel_line];
    frame.render_widget(Paragraph::new(lines), area);
}

/// The slider track as text: `├──●───────┤` with the handle at `pos`.
fn slider_gauge(pos: u8, max: u8) -> String {
    let mut out = String::from("├");
    for step in 0..=max {
        if step == pos {
            out.push('●');
        } else {
            out.push('─');
        }
    }
    out.push('┤');
    out
}

// ============================================================================
// HELP LINE
// ============================================================================

fn render_help(tv: &Tv) -> Paragraph<'static> {
    let text = help_text(tv);
    Paragraph::new(Span::styled(text, theme::STYLE_HELP))
}

/// Keybinding hints for the current mode.
fn help_text(tv: &Tv) -> &'static str {
    if !tv.is_on() {
        return "[p] power  [q] quit";
    }
    if tv.aux_active() {
        return "[e/Esc] exit  [g] guide  [n/h/d] stream  [+/-] volume  [m] mute  [p] power  [q] quit";
    }
    "[1-9] channel  [↑/↓] ch up/down  [+/-] volume  [←/→] slider  [m] mute  [g] guide  [n/h/d] stream  [p] power  [q] quit"
}

// ============================================================================
// TESTS
// ============================================================================
