//! Remote-control scripts: text commands → actions.
//!
//! Pure functions — no I/O, easily testable. A script is one command per
//! line; blank lines and `#` comments are skipped. Commands are
//! case-insensitive.
//!
//! Vocabulary:
//! - `power`
//! - `channel <n>`
//! - `up` / `down`
//! - `volup` / `voldown`
//! - `mute`
//! - `slider <v>`
//! - `guide`
//! - `exit`
//! - `stream <netflix|hulu|disney+>`

use crate::tv::Tv;
use crate::types::TvAction;

/// Parse a single script line into an action.
///
/// Returns `Ok(None)` for blank lines and comments, `Err` with a
/// human-readable message for anything unrecognized.
pub fn parse_line(line: &str) -> Result<Option<TvAction>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(format!("too many arguments: {line:?}"));
    }

    let action = match (command.as_str(), arg) {
        ("power", None) => TvAction::PowerToggle,
        ("channel", Some(n)) => {
            let number: u8 = n
                .parse()
                .map_err(|_| format!("channel wants a number, got {n:?}"))?;
            TvAction::SetChannel(number)
        }
        ("up", None) => TvAction::ChannelUp,
        ("down", None) => TvAction::ChannelDown,
        ("volup", None) => TvAction::VolumeUp,
        ("voldown", None) => TvAction::VolumeDown,
        ("mute", None) => TvAction::Mute,
        ("slider", Some(v)) => {
            let position: u8 = v
                .parse()
                .map_err(|_| format!("slider wants a position, got {v:?}"))?;
            TvAction::SetVolume(position)
        }
        ("guide", None) => TvAction::Guide,
        ("exit", None) => TvAction::ExitAux,
        ("stream", Some(name)) => TvAction::Stream(name.parse()?),
        ("channel" | "slider" | "stream", None) => {
            return Err(format!("{command} needs an argument"));
        }
        _ => return Err(format!("unknown command: {line:?}")),
    };

    Ok(Some(action))
}

/// Parse a whole script. The error names the offending 1-based line.
pub fn parse_script(text: &str) -> Result<Vec<TvAction>, String> {
    let mut actions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(action)) => actions.push(action),
            Ok(None) => {}
            Err(e) => return Err(format!("line {}: {}", index + 1, e)),
        }
    }
    Ok(actions)
}

/// Replay a script against a fresh set, invoking `observe` after each
/// action (used by `--trace`).
pub fn replay(actions: &[TvAction], mut observe: impl FnMut(&TvAction, &Tv)) -> Tv {
    let mut tv = Tv::default();
    for action in actions {
        tv.apply(*action);
        observe(action, &tv);
    }
    tv
}

// ============================================================================
// TESTS
// ============================================================================
