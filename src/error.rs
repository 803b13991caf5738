//! Error types for the typing sequencer.

use thiserror::Error;

/// Result type alias for sequencer operations.
pub type TypingResult<T> = Result<T, TypingError>;

/// Errors that can occur when building a typing sequencer.
///
/// Both variants are configuration errors raised synchronously at
/// construction. A validly constructed sequencer cannot fail at runtime:
/// every tick is a total function over the bounded state space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    /// The phrase list was empty. The sequencer needs at least one phrase.
    #[error("Phrase list is empty: at least one phrase is required")]
    EmptyPhraseList,

    /// A timing value was negative.
    #[error("Negative duration for {field}: {value} ms")]
    NegativeDuration { field: &'static str, value: i64 },
}

impl TypingError {
    /// Creates an EmptyPhraseList error.
    pub fn empty_phrase_list() -> Self {
        Self::EmptyPhraseList
    }

    /// Creates a NegativeDuration error.
    pub fn negative_duration(field: &'static str, value: i64) -> Self {
        Self::NegativeDuration { field, value }
    }
}
