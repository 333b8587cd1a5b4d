//! Traversal precondition errors.
//!
//! An impossible quiz request is reported to the caller as a value, never a
//! panic: the surrounding driver prints a warning and carries on.

use thiserror::Error;

/// Why a scored traversal refused to start.
///
/// Rejections happen before any score or question state is touched; in
/// particular the game's `current_score` keeps its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AskError {
    /// The caller asked for zero questions.
    #[error("the number of questions to ask must be at least 1")]
    NoQuestions,

    /// The caller asked for more questions than the game holds.
    #[error("there is only {available} question(s) in the list")]
    NotEnough { available: usize },
}
