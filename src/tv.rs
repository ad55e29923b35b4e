//! The television state machine.
//!
//! One total operation per remote-control gesture. Operations never fail:
//! a call whose preconditions are unmet is a silent no-op, so callers never
//! check state before invoking anything. Fully testable without a terminal.
//!
//! Design principle: illegal states are unrepresentable. The aux screen is
//! an `Option<AuxScreen>` sum type, so "aux active exactly when the display
//! index is 10..=13" holds by construction instead of by bookkeeping.

use crate::types::{AuxScreen, Limits, StreamingService, TvAction};

/// A simulated television set.
///
/// Created once at startup, powered off, at the minimum channel and volume.
/// Mutated exclusively through the operation methods below; the presentation
/// layer observes it through the derived accessors ([`Tv::display_index`],
/// [`Tv::slider_enabled`]) after each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tv {
    limits: Limits,
    power: bool,
    muted: bool,
    volume: u8,
    /// Volume to restore on unmute.
    prev_volume: u8,
    channel: u8,
    /// Present while the guide or a streaming screen is displayed.
    aux: Option<AuxScreen>,
}

impl Default for Tv {
    fn default() -> Self {
        Tv::new(Limits::default())
    }
}

impl Tv {
    /// A powered-off set with the given bounds.
    pub fn new(limits: Limits) -> Self {
        Tv {
            limits,
            power: false,
            muted: false,
            volume: limits.min_volume,
            prev_volume: limits.min_volume,
            channel: limits.min_channel,
            aux: None,
        }
    }

    // ------------------------------------------------------------------
    // Derived outputs
    // ------------------------------------------------------------------

    pub fn is_on(&self) -> bool {
        self.power
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Audible volume. Zero while muted.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// True while the guide or a streaming screen is shown.
    pub fn aux_active(&self) -> bool {
        self.aux.is_some()
    }

    /// Which screen the presentation layer should render:
    /// 0 = off, 1..=9 = channel, 10..=12 = streaming, 13 = guide.
    pub fn display_index(&self) -> u8 {
        if !self.power {
            return 0;
        }
        match self.aux {
            Some(screen) => screen.display_index(),
            None => self.channel,
        }
    }

    /// The mute side-effect signal: whether the volume slider should accept
    /// input. Read by the presentation layer after every operation.
    pub fn slider_enabled(&self) -> bool {
        self.power && !self.muted
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Dispatch a remote-control action to its operation.
    pub fn apply(&mut self, action: TvAction) {
        match action {
            TvAction::PowerToggle => self.power_toggle(),
            TvAction::SetChannel(n) => self.set_channel(n),
            TvAction::ChannelUp => self.channel_up(),
            TvAction::ChannelDown => self.channel_down(),
            TvAction::VolumeUp => self.volume_up(),
            TvAction::VolumeDown => self.volume_down(),
            TvAction::Mute => self.mute(),
            TvAction::SetVolume(v) => self.set_volume(v),
            TvAction::Guide => self.guide(),
            TvAction::ExitAux => self.exit_aux(),
            TvAction::Stream(service) => self.stream(service),
        }
    }

    /// Flip power. Powering on always lands on the minimum channel with no
    /// aux screen, regardless of what was showing when the set went off.
    pub fn power_toggle(&mut self) {
        self.power = !self.power;
        if self.power {
            self.channel = self.limits.min_channel;
            self.aux = None;
        }
        // Off: everything else retains its last value; the next power-on
        // resets the channel anyway.
    }

    /// Tune to a specific channel. No-op while off, while an aux screen is
    /// up, or when the number is outside the channel bounds.
    pub fn set_channel(&mut self, number: u8) {
        if !self.power || self.aux.is_some() {
            return;
        }
        if number < self.limits.min_channel || number > self.limits.max_channel {
            return;
        }
        self.channel = number;
    }

    /// Next channel up, wrapping from the top back to the bottom.
    pub fn channel_up(&mut self) {
        if !self.power || self.aux.is_some() {
            return;
        }
        let next = if self.channel == self.limits.max_channel {
            self.limits.min_channel
        } else {
            self.channel + 1
        };
        self.set_channel(next);
    }

    /// Next channel down, wrapping from the bottom back to the top.
    pub fn channel_down(&mut self) {
        if !self.power || self.aux.is_some() {
            return;
        }
        let next = if self.channel == self.limits.min_channel {
            self.limits.max_channel
        } else {
            self.channel - 1
        };
        self.set_channel(next);
    }

    /// One tick louder. A muted set only unmutes on this call — the
    /// restored volume is NOT additionally incremented.
    pub fn volume_up(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.muted = false;
            self.volume = self.prev_volume;
        } else if self.volume < self.limits.max_volume {
            self.volume += 1;
            self.prev_volume = self.volume;
        }
    }

    /// One tick quieter. Mirrors [`Tv::volume_up`]: unmuting restores the
    /// previous volume without also decrementing it.
    pub fn volume_down(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.muted = false;
            self.volume = self.prev_volume;
        } else if self.volume > self.limits.min_volume {
            self.volume -= 1;
            self.prev_volume = self.volume;
        }
    }

    /// Toggle mute. Muting saves the live volume and zeroes it; unmuting
    /// restores the saved value. The slider enable/disable side effect is
    /// observed through [`Tv::slider_enabled`].
    pub fn mute(&mut self) {
        if !self.power {
            return;
        }
        if self.muted {
            self.volume = self.prev_volume;
        } else {
            self.prev_volume = self.volume;
            self.volume = self.limits.min_volume;
        }
        self.muted = !self.muted;
    }

    /// The slider event: set volume to an absolute position, clamped to the
    /// bounds. Ignored while off or muted. Never touches the saved unmute
    /// volume — [`Tv::mute`] snapshots the live value at mute time.
    pub fn set_volume(&mut self, position: u8) {
        if !self.power || self.muted {
            return;
        }
        let clamped = position.clamp(self.limits.min_volume, self.limits.max_volume);
        if clamped != self.volume {
            self.volume = clamped;
        }
    }

    /// Show the guide screen.
    pub fn guide(&mut self) {
        if !self.power {
            return;
        }
        self.aux = Some(AuxScreen::Guide);
    }

    /// Leave the guide or streaming screen and return to the last channel.
    pub fn exit_aux(&mut self) {
        if !self.power {
            return;
        }
        self.aux = None;
    }

    /// Show a streaming-service screen.
    pub fn stream(&mut self, service: StreamingService) {
        if !self.power {
            return;
        }
        self.aux = Some(AuxScreen::Streaming(service));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A set that has been powered on (channel 1, volume 0).
    fn tv_on() -> Tv {
        let mut tv = Tv::default();
        tv.power_toggle();
        tv
    }

    // -- Lifecycle --

    #[test]
    fn starts_off_at_channel_one_volume_zero() {
        let tv = Tv::default();
        assert!(!tv.is_on());
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 0);
        assert_eq!(tv.channel(), 1);
        assert!(!tv.aux_active());
        assert_eq!(tv.display_index(), 0);
    }

    #[test]
    fn power_on_shows_channel_one() {
        let tv = tv_on();
        assert!(tv.is_on());
        assert_eq!(tv.channel(), 1);
        assert_eq!(tv.display_index(), 1);
        assert!(!tv.aux_active());
    }

    #[test]
    fn power_off_blanks_the_display() {
        let mut tv = tv_on();
        tv.set_channel(7);
        tv.power_toggle();
        assert!(!tv.is_on());
        assert_eq!(tv.display_index(), 0);
    }

    #[test]
    fn double_power_toggle_resets_channel_and_aux() {
        let mut tv = tv_on();
        tv.set_channel(6);
        tv.guide();
        tv.power_toggle();
        tv.power_toggle();
        assert!(tv.is_on());
        assert_eq!(tv.channel(), 1);
        assert!(!tv.aux_active());
        assert_eq!(tv.display_index(), 1);
    }

    #[test]
    fn power_cycle_while_streaming_comes_back_on_a_channel() {
        // The set must not come back wedged on the streaming screen.
        let mut tv = tv_on();
        tv.stream(StreamingService::Hulu);
        tv.power_toggle();
        tv.power_toggle();
        assert_eq!(tv.display_index(), 1);
        tv.channel_up();
        assert_eq!(tv.channel(), 2);
    }

    // -- Powered-off inertness --

    #[test]
    fn everything_is_inert_while_off() {
        let mut tv = Tv::default();
        tv.set_channel(3);
        tv.channel_up();
        tv.channel_down();
        tv.volume_up();
        tv.volume_down();
        tv.mute();
        tv.set_volume(5);
        tv.guide();
        tv.exit_aux();
        tv.stream(StreamingService::Netflix);
        assert_eq!(tv, Tv::default());
        assert_eq!(tv.display_index(), 0);
    }

    // -- Channels --

    #[test]
    fn set_channel_updates_display() {
        let mut tv = tv_on();
        tv.set_channel(5);
        assert_eq!(tv.channel(), 5);
        assert_eq!(tv.display_index(), 5);
    }

    #[test]
    fn set_channel_out_of_range_is_noop() {
        let mut tv = tv_on();
        tv.set_channel(0);
        assert_eq!(tv.channel(), 1);
        tv.set_channel(10);
        assert_eq!(tv.channel(), 1);
    }

    #[test]
    fn channel_up_wraps_at_the_top() {
        let mut tv = tv_on();
        tv.set_channel(9);
        tv.channel_up();
        assert_eq!(tv.channel(), 1);
    }

    #[test]
    fn channel_down_wraps_at_the_bottom() {
        let mut tv = tv_on();
        tv.channel_down();
        assert_eq!(tv.channel(), 9);
    }

    #[test]
    fn channel_stays_in_bounds_over_a_full_lap() {
        let mut tv = tv_on();
        for _ in 0..25 {
            tv.channel_up();
            assert!((1..=9).contains(&tv.channel()));
        }
        for _ in 0..25 {
            tv.channel_down();
            assert!((1..=9).contains(&tv.channel()));
        }
    }

    // -- Volume --

    #[test]
    fn volume_up_steps_and_saves() {
        let mut tv = tv_on();
        tv.volume_up();
        tv.volume_up();
        assert_eq!(tv.volume(), 2);
    }

    #[test]
    fn volume_up_stops_at_max() {
        let mut tv = tv_on();
        for _ in 0..15 {
            tv.volume_up();
        }
        assert_eq!(tv.volume(), 10);
        tv.volume_up();
        assert_eq!(tv.volume(), 10);
    }

    #[test]
    fn volume_down_stops_at_min() {
        let mut tv = tv_on();
        tv.volume_down();
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn slider_sets_absolute_volume() {
        let mut tv = tv_on();
        tv.set_volume(7);
        assert_eq!(tv.volume(), 7);
    }

    #[test]
    fn slider_clamps_to_bounds() {
        let mut tv = tv_on();
        tv.set_volume(200);
        assert_eq!(tv.volume(), 10);
    }

    #[test]
    fn slider_is_ignored_while_muted() {
        let mut tv = tv_on();
        tv.set_volume(4);
        tv.mute();
        tv.set_volume(9);
        assert_eq!(tv.volume(), 0);
        tv.mute();
        assert_eq!(tv.volume(), 4);
    }

    // -- Mute --

    #[test]
    fn mute_round_trip_restores_exact_volume() {
        let mut tv = tv_on();
        tv.set_volume(6);
        tv.mute();
        assert!(tv.is_muted());
        assert_eq!(tv.volume(), 0);
        assert!(!tv.slider_enabled());
        tv.mute();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 6);
        assert!(tv.slider_enabled());
    }

    #[test]
    fn volume_up_on_muted_set_only_unmutes() {
        let mut tv = tv_on();
        for _ in 0..3 {
            tv.volume_up();
        }
        tv.mute();
        assert_eq!(tv.volume(), 0);
        tv.volume_up();
        assert!(!tv.is_muted());
        // Restored, not restored-then-incremented.
        assert_eq!(tv.volume(), 3);
    }

    #[test]
    fn volume_down_on_muted_set_only_unmutes() {
        let mut tv = tv_on();
        for _ in 0..3 {
            tv.volume_up();
        }
        tv.mute();
        tv.volume_down();
        assert!(!tv.is_muted());
        assert_eq!(tv.volume(), 3);
        assert!(tv.slider_enabled());
    }

    #[test]
    fn mute_after_slider_move_restores_slider_value() {
        let mut tv = tv_on();
        tv.volume_up();
        tv.set_volume(8);
        tv.mute();
        tv.mute();
        assert_eq!(tv.volume(), 8);
    }

    // -- Guide and streaming --

    #[test]
    fn guide_scenario_locks_channel_navigation() {
        let mut tv = tv_on();
        tv.set_channel(5);
        assert_eq!(tv.display_index(), 5);

        tv.guide();
        assert_eq!(tv.display_index(), 13);
        assert!(tv.aux_active());

        tv.channel_up();
        assert_eq!(tv.display_index(), 13);
        assert_eq!(tv.channel(), 5);

        tv.set_channel(2);
        assert_eq!(tv.channel(), 5);

        tv.exit_aux();
        assert_eq!(tv.display_index(), 5);
        assert!(!tv.aux_active());
    }

    #[test]
    fn streaming_screens_use_their_fixed_indices() {
        let mut tv = tv_on();
        tv.stream(StreamingService::Netflix);
        assert_eq!(tv.display_index(), 10);
        tv.stream(StreamingService::Hulu);
        assert_eq!(tv.display_index(), 11);
        tv.stream(StreamingService::DisneyPlus);
        assert_eq!(tv.display_index(), 12);
        assert!(tv.aux_active());
    }

    #[test]
    fn guide_and_streaming_can_replace_each_other() {
        let mut tv = tv_on();
        tv.stream(StreamingService::Netflix);
        tv.guide();
        assert_eq!(tv.display_index(), 13);
        tv.stream(StreamingService::Hulu);
        assert_eq!(tv.display_index(), 11);
    }

    #[test]
    fn exit_returns_to_last_channel_from_streaming() {
        let mut tv = tv_on();
        tv.set_channel(4);
        tv.stream(StreamingService::DisneyPlus);
        tv.exit_aux();
        assert_eq!(tv.display_index(), 4);
    }

    #[test]
    fn volume_still_works_on_an_aux_screen() {
        let mut tv = tv_on();
        tv.guide();
        tv.volume_up();
        assert_eq!(tv.volume(), 1);
        tv.mute();
        assert!(tv.is_muted());
    }

    // -- Bounds under mixed sequences --

    #[test]
    fn bounds_hold_under_a_mixed_sequence() {
        let mut tv = Tv::default();
        let script = [
            TvAction::VolumeUp,
            TvAction::PowerToggle,
            TvAction::SetVolume(10),
            TvAction::VolumeUp,
            TvAction::Mute,
            TvAction::VolumeDown,
            TvAction::SetChannel(9),
            TvAction::ChannelUp,
            TvAction::Guide,
            TvAction::ChannelDown,
            TvAction::Stream(StreamingService::Netflix),
            TvAction::ExitAux,
            TvAction::ChannelDown,
            TvAction::PowerToggle,
            TvAction::VolumeDown,
            TvAction::PowerToggle,
            TvAction::VolumeDown,
        ];
        for action in script {
            tv.apply(action);
            assert!((0..=10).contains(&tv.volume()));
            assert!((1..=9).contains(&tv.channel()));
            let idx = tv.display_index();
            assert!(idx <= 13);
            assert_eq!(tv.aux_active(), (10..=13).contains(&idx));
        }
    }

    // -- Custom limits --

    #[test]
    fn custom_limits_are_respected() {
        let limits = Limits {
            min_volume: 0,
            max_volume: 5,
            min_channel: 1,
            max_channel: 3,
        };
        let mut tv = Tv::new(limits);
        tv.power_toggle();
        for _ in 0..10 {
            tv.volume_up();
        }
        assert_eq!(tv.volume(), 5);
        tv.set_channel(3);
        tv.channel_up();
        assert_eq!(tv.channel(), 1);
    }
}
