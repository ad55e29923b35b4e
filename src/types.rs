//! Domain types for tv-sim.
//!
//! Pure data shared by the state machine, the script parser, the report
//! formatter, and the TUI. No I/O anywhere in this module.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// LIMITS
// ============================================================================

/// Volume and channel bounds, injected into the state machine at
/// construction rather than hardcoded through the logic.
///
/// Invariant (enforced by [`crate::tv::Tv`]): volume stays within
/// `[min_volume, max_volume]` and channel within `[min_channel, max_channel]`
/// under every operation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min_volume: u8,
    pub max_volume: u8,
    pub min_channel: u8,
    pub max_channel: u8,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_volume: 0,
            max_volume: 10,
            min_channel: 1,
            max_channel: 9,
        }
    }
}

// ============================================================================
// STREAMING SERVICES
// ============================================================================

/// The streaming services the set knows about.
///
/// A closed enum: an unrecognized service name cannot reach the state
/// machine — parsing boundaries (script parser, key map) reject it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamingService {
    Netflix,
    Hulu,
    DisneyPlus,
}

impl StreamingService {
    /// Fixed display index for this service's screen.
    pub fn display_index(self) -> u8 {
        match self {
            StreamingService::Netflix => 10,
            StreamingService::Hulu => 11,
            StreamingService::DisneyPlus => 12,
        }
    }

    /// On-screen label.
    pub fn label(self) -> &'static str {
        match self {
            StreamingService::Netflix => "Netflix",
            StreamingService::Hulu => "Hulu",
            StreamingService::DisneyPlus => "Disney+",
        }
    }
}

impl fmt::Display for StreamingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StreamingService {
    type Err = String;

    /// Case-insensitive; accepts the on-screen label plus common spellings
    /// ("disney", "disney+", "disneyplus").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "netflix" => Ok(StreamingService::Netflix),
            "hulu" => Ok(StreamingService::Hulu),
            "disney" | "disney+" | "disneyplus" => Ok(StreamingService::DisneyPlus),
            other => Err(format!("unknown streaming service: {other:?}")),
        }
    }
}

// ============================================================================
// AUX SCREENS
// ============================================================================

/// A non-channel display mode: the guide or a streaming-service screen.
///
/// Channel navigation is disabled while one of these is shown; `exit` (or a
/// power cycle) returns to channel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxScreen {
    Guide,
    Streaming(StreamingService),
}

impl AuxScreen {
    /// Display index of this screen (10-12 streaming, 13 guide).
    pub fn display_index(self) -> u8 {
        match self {
            AuxScreen::Guide => 13,
            AuxScreen::Streaming(service) => service.display_index(),
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// One remote-control gesture.
///
/// Every variant maps to exactly one state-machine operation; the input
/// layers (TUI key map, script parser) produce these with no logic of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvAction {
    PowerToggle,
    SetChannel(u8),
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
    Mute,
    /// Slider moved to an absolute position.
    SetVolume(u8),
    Guide,
    ExitAux,
    Stream(StreamingService),
}

// ============================================================================
// CHANNEL LINEUP
// ============================================================================

/// Station name for a channel number in the default 1..9 lineup.
///
/// Falls back to a generic label outside the known table so custom limits
/// still render something sensible.
pub fn channel_name(channel: u8) -> String {
    match channel {
        1 => "ABC".to_string(),
        2 => "NBC".to_string(),
        3 => "ESPN".to_string(),
        4 => "FOX".to_string(),
        5 => "Food Network".to_string(),
        6 => "Nickelodeon".to_string(),
        7 => "History".to_string(),
        8 => "CW".to_string(),
        9 => "Ion Television".to_string(),
        n => format!("Channel {n}"),
    }
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// Output format for snapshots and traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_the_remote() {
        let limits = Limits::default();
        assert_eq!(limits.min_volume, 0);
        assert_eq!(limits.max_volume, 10);
        assert_eq!(limits.min_channel, 1);
        assert_eq!(limits.max_channel, 9);
    }

    #[test]
    fn streaming_indices_are_fixed() {
        assert_eq!(StreamingService::Netflix.display_index(), 10);
        assert_eq!(StreamingService::Hulu.display_index(), 11);
        assert_eq!(StreamingService::DisneyPlus.display_index(), 12);
    }

    #[test]
    fn service_parses_case_insensitively() {
        assert_eq!("NETFLIX".parse(), Ok(StreamingService::Netflix));
        assert_eq!("hulu".parse(), Ok(StreamingService::Hulu));
        assert_eq!("Disney+".parse(), Ok(StreamingService::DisneyPlus));
        assert_eq!("disneyplus".parse(), Ok(StreamingService::DisneyPlus));
    }

    #[test]
    fn unknown_service_is_rejected() {
        assert!(StreamingService::from_str("peacock").is_err());
        assert!(StreamingService::from_str("").is_err());
    }

    #[test]
    fn guide_index_is_thirteen() {
        assert_eq!(AuxScreen::Guide.display_index(), 13);
        assert_eq!(
            AuxScreen::Streaming(StreamingService::Hulu).display_index(),
            11
        );
    }

    #[test]
    fn channel_names_cover_the_lineup() {
        assert_eq!(channel_name(1), "ABC");
        assert_eq!(channel_name(9), "Ion Television");
        assert_eq!(channel_name(42), "Channel 42");
    }
}
