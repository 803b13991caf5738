//! Typecycle - timer-driven typewriter text engine.
//!
//! Cycles through a fixed phrase list, revealing and then retracting each
//! phrase character by character, looping forever:
//!
//! - **Explicit state machine**: `Typing` / `Pausing` / `Deleting` as a
//!   tagged enum, one transition per tick, no hidden boundary cases
//! - **Derived text**: the visible string is always recomputed from the
//!   revealed-character count, so the two can never drift apart
//! - **Bring your own timer**: drive `tick()` yourself, or use the bundled
//!   tokio [`TypingDriver`] with single-flight timer discipline
//!
//! # Example
//!
//! ```rust
//! use typecycle::{TimingConfig, TypingSequencer};
//!
//! let config = TimingConfig::new()
//!     .with_typing_interval_ms(40)
//!     .with_pause_duration_ms(1500);
//! let mut seq = TypingSequencer::with_config(["Hello", "World"], config).unwrap();
//!
//! // Each tick applies one transition and says when the next one is due.
//! let out = seq.tick();
//! assert_eq!(out.text, "H");
//! assert!(out.emit);
//!
//! // Sleep for `out.next_delay`, tick again, repeat.
//! ```

pub mod error;

// Sequencer module
pub mod sequencer;

// Re-exports for convenience
pub use error::{TypingError, TypingResult};
pub use sequencer::{Mode, SequencerState, TickOutcome, TimingConfig, TypingSequencer};

#[cfg(feature = "driver")]
pub use sequencer::TypingDriver;

#[cfg(feature = "wasm")]
pub use sequencer::JsTypingSequencer;
