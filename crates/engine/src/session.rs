use std::fmt;

use chrono::{DateTime, Utc};

use quiz_core::{AnswerOutcome, AnswerRecord, Question, QuizSummary};

use crate::error::SessionError;
use crate::progress::QuizProgress;

/// In-memory state machine for one quiz run.
///
/// Steps through the question list sequentially, committing exactly one
/// outcome per question. The per-question input/timeout race is the runner's
/// job; whoever wins it calls [`QuizSession::record`], and a second commit
/// for the same question is rejected.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session over the given questions.
    ///
    /// `started_at` should come from the runner's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            records: Vec::new(),
            started_at,
            finished_at: None,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been resolved.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.records.len()
    }

    /// Number of questions not yet resolved.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    /// Score so far: the number of correctly answered questions.
    #[must_use]
    pub fn score(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome.is_correct())
            .count()
    }

    /// Snapshot of how far the quiz has advanced.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Commit the current question's outcome and advance the session.
    ///
    /// `recorded_at` should come from the runner's clock. Resolving the last
    /// question marks the session finished at that same instant.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished;
    /// a question whose outcome was committed can never be advanced again.
    pub fn record(
        &mut self,
        outcome: AnswerOutcome,
        recorded_at: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.records
            .push(AnswerRecord::new(self.current, outcome, recorded_at));

        self.current += 1;
        if self.current >= self.questions.len() {
            self.finished_at = Some(recorded_at);
        }

        self.records.last().ok_or(SessionError::Completed)
    }

    /// Build the final summary from the recorded outcomes.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while questions remain, and
    /// propagates count validation failures from the summary itself.
    pub fn build_summary(&self) -> Result<QuizSummary, SessionError> {
        let finished_at = self.finished_at.ok_or(SessionError::Incomplete)?;
        Ok(QuizSummary::from_records(
            self.started_at,
            finished_at,
            &self.records,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
