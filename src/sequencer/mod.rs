//! Typing sequencer module.
//!
//! Provides the typewriter state machine, the timer-driven runner, and the
//! browser bindings.

pub mod model;
pub mod manager;

#[cfg(feature = "driver")]
pub mod driver;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use model::{Mode, SequencerState, TickOutcome, TimingConfig};
pub use manager::TypingSequencer;

#[cfg(feature = "driver")]
pub use driver::TypingDriver;

#[cfg(feature = "wasm")]
pub use wasm::JsTypingSequencer;
