use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::outcome::{AnswerOutcome, AnswerRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("total answers ({total}) does not match outcome counts ({sum})")]
    CountMismatch { total: usize, sum: usize },
}

/// Aggregate result of a finished quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    total: usize,
    correct: usize,
    wrong: usize,
    invalid: usize,
    timed_out: usize,
}

impl QuizSummary {
    /// Assemble a summary from already-counted outcomes.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `finished_at` is before
    /// `started_at`, and `SummaryError::CountMismatch` if the per-outcome
    /// counts do not add up to `total`.
    pub fn from_parts(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        total: usize,
        correct: usize,
        wrong: usize,
        invalid: usize,
        timed_out: usize,
    ) -> Result<Self, SummaryError> {
        if finished_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let sum = correct + wrong + invalid + timed_out;
        if sum != total {
            return Err(SummaryError::CountMismatch { total, sum });
        }

        Ok(Self {
            started_at,
            finished_at,
            total,
            correct,
            wrong,
            invalid,
            timed_out,
        })
    }

    /// Build a summary by counting a run's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `finished_at` is before
    /// `started_at`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        let mut correct = 0_usize;
        let mut wrong = 0_usize;
        let mut invalid = 0_usize;
        let mut timed_out = 0_usize;

        for record in records {
            match record.outcome {
                AnswerOutcome::Correct => correct += 1,
                AnswerOutcome::Wrong => wrong += 1,
                AnswerOutcome::Invalid => invalid += 1,
                AnswerOutcome::TimedOut => timed_out += 1,
            }
        }

        Self::from_parts(
            started_at,
            finished_at,
            records.len(),
            correct,
            wrong,
            invalid,
            timed_out,
        )
    }

    /// The score shown in the final report, i.e. the correct-answer count.
    #[must_use]
    pub fn score(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> usize {
        self.wrong
    }

    #[must_use]
    pub fn invalid(&self) -> usize {
        self.invalid
    }

    #[must_use]
    pub fn timed_out(&self) -> usize {
        self.timed_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn summary_counts_outcomes() {
        let started = fixed_now();
        let finished = started + Duration::seconds(40);
        let records = vec![
            AnswerRecord::new(0, AnswerOutcome::Correct, started),
            AnswerRecord::new(1, AnswerOutcome::Wrong, started),
            AnswerRecord::new(2, AnswerOutcome::TimedOut, started),
            AnswerRecord::new(3, AnswerOutcome::Correct, started),
            AnswerRecord::new(4, AnswerOutcome::Invalid, finished),
        ];

        let summary = QuizSummary::from_records(started, finished, &records).unwrap();

        assert_eq!(summary.total(), 5);
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.wrong(), 1);
        assert_eq!(summary.invalid(), 1);
        assert_eq!(summary.timed_out(), 1);
    }

    #[test]
    fn summary_rejects_inverted_time_range() {
        let started = fixed_now();
        let err = QuizSummary::from_records(started, started - Duration::seconds(1), &[])
            .unwrap_err();

        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_counts_that_do_not_add_up() {
        let now = fixed_now();
        let err = QuizSummary::from_parts(now, now, 5, 1, 1, 0, 0).unwrap_err();

        assert_eq!(err, SummaryError::CountMismatch { total: 5, sum: 2 });
    }

    #[test]
    fn empty_run_summarizes_to_zeroes() {
        let now = fixed_now();
        let summary = QuizSummary::from_records(now, now, &[]).unwrap();

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.score(), 0);
    }
}
