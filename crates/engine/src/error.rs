//! Shared error types for the engine crate.

use std::io;

use thiserror::Error;

use bank::BankError;
use quiz_core::SummaryError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for a quiz")]
    Empty,
    #[error("quiz already completed")]
    Completed,
    #[error("quiz is still in progress")]
    Incomplete,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Errors emitted by `Runner`.
///
/// Timeouts and malformed answers are not errors; they grade as non-scoring
/// outcomes and the quiz continues. Only conditions that make the quiz
/// impossible to continue end up here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    #[error("input stream closed before the quiz finished")]
    InputClosed,
    #[error("failed to read an answer: {0}")]
    Input(#[from] io::Error),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
