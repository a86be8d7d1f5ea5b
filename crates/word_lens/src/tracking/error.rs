//! Word tracking errors

use thiserror::Error;

use super::word::WordId;

/// Inconsistent tracking events
///
/// None of these are fatal: the store is left unchanged and the caller logs
/// the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    /// A word was detected while a word with the same identity is tracked
    #[error("word {id} was already detected before")]
    DuplicateWord {
        /// Identity of the rejected word
        id: WordId,
    },

    /// A word was lost that is not tracked
    #[error("non-existing word {id} was lost")]
    UnknownWord {
        /// Identity of the missing word
        id: WordId,
    },
}
