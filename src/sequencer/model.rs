//! Data models for the typing sequencer.
//!
//! The sequencer's phase is an explicit tagged enum rather than boolean
//! flags, so boundary conditions (phrase fully typed, phrase fully
//! deleted) each map to exactly one transition.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TypingError, TypingResult};

/// Default typing interval in milliseconds (one revealed character per tick).
pub const DEFAULT_TYPING_INTERVAL_MS: i64 = 60;

/// Default deleting interval in milliseconds (one retracted character per tick).
pub const DEFAULT_DELETING_INTERVAL_MS: i64 = 30;

/// Default hold duration in milliseconds once a phrase is fully typed.
pub const DEFAULT_PAUSE_DURATION_MS: i64 = 2000;

// =============================================================================
// MODE
// =============================================================================

/// The sequencer's current phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Revealing the active phrase one character per tick.
    #[default]
    Typing,

    /// Holding the fully typed phrase on screen for the pause duration.
    Pausing,

    /// Retracting the active phrase one character per tick.
    Deleting,
}

// =============================================================================
// TIMING CONFIGURATION
// =============================================================================

/// Timing configuration for a sequencer, supplied once at construction.
///
/// Values are signed milliseconds so that out-of-range inputs (from a JS
/// config object, CLI flag, or deserialized settings blob) are representable
/// and rejected by [`validate`](TimingConfig::validate) instead of silently
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between typing ticks.
    pub typing_interval_ms: i64,

    /// Delay between deleting ticks.
    pub deleting_interval_ms: i64,

    /// Hold duration after a phrase is fully typed.
    pub pause_duration_ms: i64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            deleting_interval_ms: DEFAULT_DELETING_INTERVAL_MS,
            pause_duration_ms: DEFAULT_PAUSE_DURATION_MS,
        }
    }
}

impl TimingConfig {
    /// Creates a config with the default cadence (60 / 30 / 2000 ms).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set the typing interval in milliseconds.
    pub fn with_typing_interval_ms(mut self, ms: i64) -> Self {
        self.typing_interval_ms = ms;
        self
    }

    /// Builder: Set the deleting interval in milliseconds.
    pub fn with_deleting_interval_ms(mut self, ms: i64) -> Self {
        self.deleting_interval_ms = ms;
        self
    }

    /// Builder: Set the pause duration in milliseconds.
    pub fn with_pause_duration_ms(mut self, ms: i64) -> Self {
        self.pause_duration_ms = ms;
        self
    }

    /// Checks that every duration is non-negative.
    pub fn validate(&self) -> TypingResult<()> {
        if self.typing_interval_ms < 0 {
            return Err(TypingError::negative_duration(
                "typing_interval_ms",
                self.typing_interval_ms,
            ));
        }
        if self.deleting_interval_ms < 0 {
            return Err(TypingError::negative_duration(
                "deleting_interval_ms",
                self.deleting_interval_ms,
            ));
        }
        if self.pause_duration_ms < 0 {
            return Err(TypingError::negative_duration(
                "pause_duration_ms",
                self.pause_duration_ms,
            ));
        }
        Ok(())
    }

    /// The typing interval as a [`Duration`]. Caller must have validated.
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms.max(0) as u64)
    }

    /// The deleting interval as a [`Duration`]. Caller must have validated.
    pub fn deleting_interval(&self) -> Duration {
        Duration::from_millis(self.deleting_interval_ms.max(0) as u64)
    }

    /// The pause duration as a [`Duration`]. Caller must have validated.
    pub fn pause_duration(&self) -> Duration {
        Duration::from_millis(self.pause_duration_ms.max(0) as u64)
    }
}

// =============================================================================
// SEQUENCER STATE
// =============================================================================

/// Snapshot of a sequencer's position in its cycle.
///
/// The visible text is not part of the snapshot: it is always derived from
/// `phrase_index` and `char_count`, never stored alongside them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerState {
    /// Index of the active phrase, wraps to 0 after the last phrase.
    pub phrase_index: usize,

    /// Number of characters of the active phrase currently revealed.
    pub char_count: usize,

    /// Current phase.
    pub mode: Mode,
}

// =============================================================================
// TICK OUTCOME
// =============================================================================

/// The result of applying one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether this tick should be surfaced to the display. False for the
    /// pause-to-delete handoff and the phrase-wrap tick, which change no
    /// visible text.
    pub emit: bool,

    /// The visible text after the transition.
    pub text: String,

    /// Delay until the next tick should fire.
    pub next_delay: Duration,
}

impl TickOutcome {
    /// The next-tick delay in whole milliseconds.
    pub fn next_delay_ms(&self) -> u64 {
        self.next_delay.as_millis() as u64
    }
}

// =============================================================================
// TESTS
// =============================================================================
