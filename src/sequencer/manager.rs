//! Core `TypingSequencer` state machine.
//!
//! One [`tick`](TypingSequencer::tick) applies exactly one transition:
//!
//! | Mode     | Condition          | Action                     | Next mode | Next delay |
//! |----------|--------------------|----------------------------|-----------|------------|
//! | Typing   | chars < phrase len | reveal one character       | Typing    | typing     |
//! | Typing   | phrase complete    | hold frame, arm pause      | Pausing   | pause      |
//! | Pausing  | timer fired        | none                       | Deleting  | deleting   |
//! | Deleting | chars > 0          | retract one character      | Deleting  | deleting   |
//! | Deleting | chars == 0         | advance phrase (wrapping)  | Typing    | typing     |
//!
//! The completed phrase is held for one extra typing-interval tick before
//! the pause timer arms; deletion-complete advances to the next phrase with
//! no extra pause. Ticking is total: a validly constructed sequencer cannot
//! reach an invalid state.

use std::time::Duration;

use crate::error::{TypingError, TypingResult};
use super::model::{Mode, SequencerState, TickOutcome, TimingConfig};

/// The typing sequencer: cycles through a fixed phrase list, revealing and
/// retracting each phrase character by character, forever.
///
/// The sequencer owns its state exclusively and advances only through
/// [`tick`](Self::tick). It does not own a timer; a driver (async task, JS
/// `setTimeout`, or a plain loop) sleeps for [`next_delay`](Self::next_delay)
/// between ticks.
#[derive(Debug, Clone)]
pub struct TypingSequencer {
    /// Phrase list, immutable for the sequencer's lifetime.
    phrases: Vec<String>,
    /// Per-phrase character counts, precomputed so ticks never rescan.
    phrase_chars: Vec<usize>,
    config: TimingConfig,
    state: SequencerState,
}

impl TypingSequencer {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates a sequencer with the default cadence (60 / 30 / 2000 ms).
    ///
    /// Fails with [`TypingError::EmptyPhraseList`] if `phrases` is empty.
    pub fn new<I, S>(phrases: I) -> TypingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(phrases, TimingConfig::default())
    }

    /// Creates a sequencer with an explicit timing configuration.
    ///
    /// Fails with [`TypingError::EmptyPhraseList`] for an empty phrase list
    /// or [`TypingError::NegativeDuration`] for a negative duration.
    pub fn with_config<I, S>(phrases: I, config: TimingConfig) -> TypingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypingError::empty_phrase_list());
        }
        config.validate()?;

        let phrase_chars = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            phrase_chars,
            config,
            state: SequencerState::default(),
        })
    }

    // =========================================================================
    // TICKING
    // =========================================================================

    /// Applies exactly one transition and returns what happened.
    pub fn tick(&mut self) -> TickOutcome {
        let len = self.phrase_chars[self.state.phrase_index];
        match self.state.mode {
            Mode::Typing if self.state.char_count < len => {
                self.state.char_count += 1;
                self.outcome(true)
            }
            Mode::Typing => {
                // Full phrase on screen: hold this frame, then pause.
                self.state.mode = Mode::Pausing;
                self.outcome(true)
            }
            Mode::Pausing => {
                self.state.mode = Mode::Deleting;
                self.outcome(false)
            }
            Mode::Deleting if self.state.char_count > 0 => {
                self.state.char_count -= 1;
                self.outcome(true)
            }
            Mode::Deleting => {
                // Fully deleted: advance immediately, no inter-phrase pause.
                self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                self.state.mode = Mode::Typing;
                self.outcome(false)
            }
        }
    }

    fn outcome(&self, emit: bool) -> TickOutcome {
        TickOutcome {
            emit,
            text: self.current_text(),
            next_delay: self.next_delay(),
        }
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// The currently visible text, derived from the revealed-character count.
    pub fn current_text(&self) -> String {
        self.phrases[self.state.phrase_index]
            .chars()
            .take(self.state.char_count)
            .collect()
    }

    /// Delay until the next tick should fire, given the current mode.
    pub fn next_delay(&self) -> Duration {
        match self.state.mode {
            Mode::Typing => self.config.typing_interval(),
            Mode::Pausing => self.config.pause_duration(),
            Mode::Deleting => self.config.deleting_interval(),
        }
    }

    /// Snapshot of the current position in the cycle.
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Current phase.
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Index of the active phrase.
    pub fn phrase_index(&self) -> usize {
        self.state.phrase_index
    }

    /// Number of characters currently revealed.
    pub fn char_count(&self) -> usize {
        self.state.char_count
    }

    /// Number of configured phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// The timing configuration.
    pub fn config(&self) -> TimingConfig {
        self.config
    }
}

// =============================================================================
// TESTS
// =============================================================================
