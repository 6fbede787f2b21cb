use chrono::{DateTime, Utc};

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// How a single question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The selected option matched the correct answer.
    Correct,
    /// A listed option was selected, but not the correct one.
    Wrong,
    /// Input was not a number or pointed past the option list.
    Invalid,
    /// The countdown expired before any input arrived.
    TimedOut,
}

impl AnswerOutcome {
    /// Returns true if this outcome earns a score point.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// Record of how one question in a quiz run was resolved.
///
/// Stores the question's position in the run, the outcome, and when the
/// outcome was committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub outcome: AnswerOutcome,
    pub recorded_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question_index: usize, outcome: AnswerOutcome, recorded_at: DateTime<Utc>) -> Self {
        Self {
            question_index,
            outcome,
            recorded_at,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
