//! Ports between the quiz engine and the outside world.
//!
//! The engine never touches stdio directly; it talks to an answer source and
//! a presenter so tests (and any other front end) can swap the terminal out.

use std::io;

use async_trait::async_trait;

use quiz_core::{Question, QuizSummary};

/// Supplies one line of user input per question.
#[async_trait]
pub trait AnswerSource: Send {
    /// Awaits the next input line, without the trailing newline.
    ///
    /// `Ok(None)` means the stream is closed and no further input will ever
    /// arrive. The returned future must be safe to drop at its await point:
    /// a line that was not yielded stays available for the next call.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the underlying stream fails.
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Renders quiz output.
pub trait Presenter: Send {
    /// Shows a question's prompt and its numbered options.
    fn question(&mut self, question: &Question);

    /// Shows the seconds left on the current question's countdown.
    fn countdown(&mut self, seconds_left: u32);

    /// Tells the user the countdown expired.
    fn timeout_notice(&mut self);

    /// Tells the user their input did not select an option.
    fn invalid_notice(&mut self);

    /// Shows the final score.
    fn summary(&mut self, summary: &QuizSummary);
}
