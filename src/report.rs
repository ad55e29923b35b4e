//! Snapshot formatting for the script runner.
//!
//! Pure functions — (Tv, OutputFormat) → String. No I/O, no side effects.

use serde::Serialize;

use crate::tv::Tv;
use crate::types::{channel_name, OutputFormat, TvAction};

/// A serializable view of the set at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TvSnapshot {
    pub power: bool,
    pub muted: bool,
    pub volume: u8,
    pub channel: u8,
    pub display_index: u8,
    pub aux_active: bool,
    pub slider_enabled: bool,
    /// What the display is showing, as a label ("off", "ABC", "Guide", ...).
    pub screen: String,
}

impl TvSnapshot {
    pub fn of(tv: &Tv) -> Self {
        TvSnapshot {
            power: tv.is_on(),
            muted: tv.is_muted(),
            volume: tv.volume(),
            channel: tv.channel(),
            display_index: tv.display_index(),
            aux_active: tv.aux_active(),
            slider_enabled: tv.slider_enabled(),
            screen: screen_label(tv),
        }
    }
}

/// Label for whatever the display is currently showing.
pub fn screen_label(tv: &Tv) -> String {
    match tv.display_index() {
        0 => "off".to_string(),
        idx @ 1..=9 => channel_name(idx),
        10 => "Netflix".to_string(),
        11 => "Hulu".to_string(),
        12 => "Disney+".to_string(),
        _ => "Guide".to_string(),
    }
}

/// Format a snapshot for output.
pub fn format_snapshot(tv: &Tv, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(tv),
        OutputFormat::Json => format_json(tv),
    }
}

/// One-line summary for `--trace` output.
pub fn trace_line(action: &TvAction, tv: &Tv) -> String {
    let audio = if tv.is_muted() {
        "muted".to_string()
    } else {
        format!("vol {}", tv.volume())
    };
    format!(
        "{:<14} -> screen {:>2} ({}), {}",
        action_label(action),
        tv.display_index(),
        screen_label(tv),
        audio,
    )
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(tv: &Tv) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Power:   {}\n",
        if tv.is_on() { "on" } else { "off" }
    ));
    out.push_str(&format!(
        "Screen:  {} (index {})\n",
        screen_label(tv),
        tv.display_index()
    ));

    if tv.is_on() {
        out.push_str(&format!(
            "Channel: {} ({})\n",
            tv.channel(),
            channel_name(tv.channel())
        ));
        if tv.is_muted() {
            out.push_str("Volume:  muted\n");
        } else {
            out.push_str(&format!("Volume:  {}\n", tv.volume()));
        }
        out.push_str(&format!(
            "Slider:  {}\n",
            if tv.slider_enabled() { "enabled" } else { "disabled" }
        ));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(tv: &Tv) -> String {
    let snapshot = TvSnapshot::of(tv);
    serde_json::to_string_pretty(&snapshot)
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn action_label(action: &TvAction) -> String {
    match action {
        TvAction::PowerToggle => "power".to_string(),
        TvAction::SetChannel(n) => format!("channel {n}"),
        TvAction::ChannelUp => "up".to_string(),
        TvAction::ChannelDown => "down".to_string(),
        TvAction::VolumeUp => "volup".to_string(),
        TvAction::VolumeDown => "voldown".to_string(),
        TvAction::Mute => "mute".to_string(),
        TvAction::SetVolume(v) => format!("slider {v}"),
        TvAction::Guide => "guide".to_string(),
        TvAction::ExitAux => "exit".to_string(),
        TvAction::Stream(s) => format!("stream {s}"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StreamingService;

    fn tv_on() -> Tv {
        let mut tv = Tv::default();
        tv.power_toggle();
        tv
    }

    #[test]
    fn snapshot_of_a_fresh_set() {
        let snap = TvSnapshot::of(&Tv::default());
        assert!(!snap.power);
        assert_eq!(snap.display_index, 0);
        assert_eq!(snap.screen, "off");
        assert!(!snap.slider_enabled);
    }

    #[test]
    fn snapshot_reflects_mute() {
        let mut tv = tv_on();
        tv.set_volume(4);
        tv.mute();
        let snap = TvSnapshot::of(&tv);
        assert!(snap.muted);
        assert_eq!(snap.volume, 0);
        assert!(!snap.slider_enabled);
    }

    #[test]
    fn screen_labels_cover_every_mode() {
        let mut tv = tv_on();
        assert_eq!(screen_label(&tv), "ABC");
        tv.set_channel(3);
        assert_eq!(screen_label(&tv), "ESPN");
        tv.guide();
        assert_eq!(screen_label(&tv), "Guide");
        tv.stream(StreamingService::DisneyPlus);
        assert_eq!(screen_label(&tv), "Disney+");
        tv.power_toggle();
        assert_eq!(screen_label(&tv), "off");
    }

    #[test]
    fn human_format_mentions_the_station() {
        let mut tv = tv_on();
        tv.set_channel(5);
        let out = format_snapshot(&tv, OutputFormat::Human);
        assert!(out.contains("Power:   on"));
        assert!(out.contains("Food Network"));
        assert!(out.contains("Volume:  0"));
    }

    #[test]
    fn human_format_for_an_off_set_is_terse() {
        let out = format_snapshot(&Tv::default(), OutputFormat::Human);
        assert!(out.contains("Power:   off"));
        assert!(!out.contains("Channel:"));
    }

    #[test]
    fn json_format_round_trips_the_fields() {
        let mut tv = tv_on();
        tv.set_channel(2);
        tv.volume_up();
        let out = format_snapshot(&tv, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["power"], true);
        assert_eq!(value["channel"], 2);
        assert_eq!(value["volume"], 1);
        assert_eq!(value["display_index"], 2);
        assert_eq!(value["screen"], "NBC");
    }

    #[test]
    fn trace_line_shows_action_and_outcome() {
        let mut tv = tv_on();
        tv.set_channel(5);
        let line = trace_line(&TvAction::SetChannel(5), &tv);
        assert!(line.contains("channel 5"));
        assert!(line.contains("Food Network"));
        assert!(line.contains("vol 0"));

        tv.mute();
        let line = trace_line(&TvAction::Mute, &tv);
        assert!(line.contains("muted"));
    }
}
