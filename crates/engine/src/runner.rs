use log::{debug, info};
use rand::rng;
use rand::seq::SliceRandom;

use bank::QuestionSource;
use quiz_core::{AnswerOutcome, Clock, Question, QuizSummary, Selection};

use crate::error::RunError;
use crate::interface::{AnswerSource, Presenter};
use crate::session::QuizSession;
use crate::timer::Countdown;

/// Default per-question budget, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 10;

/// Drives a full quiz: presentation, timing, grading, and the final summary.
#[derive(Debug, Clone)]
pub struct Runner {
    clock: Clock,
    time_limit_secs: u32,
    shuffle: bool,
}

impl Runner {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            shuffle: false,
        }
    }

    /// Overrides the per-question budget.
    #[must_use]
    pub fn with_time_limit(mut self, seconds: u32) -> Self {
        self.time_limit_secs = seconds;
        self
    }

    /// Randomizes question order at the start of each run. Off by default;
    /// the built-in set plays in its fixed order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Runs one full quiz over the given question source.
    ///
    /// Each question is shown, then raced: the next input line against a
    /// fresh countdown. Whichever side wins commits the question's one
    /// outcome; the losing side is dropped before it can touch the session,
    /// and the session itself refuses a second commit. When input wins it is
    /// parsed and graded; a line that is not a listed option number is a
    /// non-scoring answer, never a failure.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Bank` if the source fails validation,
    /// `RunError::InputClosed` if the answer stream ends mid-quiz, and
    /// `RunError::Input` if reading an answer fails.
    pub async fn run(
        &self,
        source: &dyn QuestionSource,
        answers: &mut dyn AnswerSource,
        presenter: &mut dyn Presenter,
    ) -> Result<QuizSummary, RunError> {
        let mut questions = source.load()?;
        if self.shuffle {
            let mut rng = rng();
            questions.as_mut_slice().shuffle(&mut rng);
        }

        let mut session = QuizSession::new(questions, self.clock.now())?;
        info!("quiz started with {} questions", session.total_questions());

        loop {
            let Some(question) = session.current_question().cloned() else {
                break;
            };
            presenter.question(&question);

            let mut countdown = Countdown::new(self.time_limit_secs);
            let outcome = tokio::select! {
                biased;
                line = answers.next_line() => {
                    match line? {
                        Some(text) => grade_line(&question, &text),
                        None => return Err(RunError::InputClosed),
                    }
                }
                () = countdown.tick_until_expired(|seconds_left| {
                    presenter.countdown(seconds_left);
                }) => AnswerOutcome::TimedOut,
            };
            countdown.stop();

            match outcome {
                AnswerOutcome::TimedOut => presenter.timeout_notice(),
                AnswerOutcome::Invalid => presenter.invalid_notice(),
                AnswerOutcome::Correct | AnswerOutcome::Wrong => {}
            }

            let record = session.record(outcome, self.clock.now())?;
            debug!(
                "question {} resolved as {:?}",
                record.question_index + 1,
                record.outcome
            );
        }

        let summary = session.build_summary()?;
        info!(
            "quiz finished with score {}/{}",
            summary.score(),
            summary.total()
        );
        presenter.summary(&summary);
        Ok(summary)
    }
}

fn grade_line(question: &Question, line: &str) -> AnswerOutcome {
    match line.parse::<Selection>() {
        Ok(selection) => question.grade(selection),
        Err(err) => {
            debug!("answer {line:?} did not parse: {err}");
            AnswerOutcome::Invalid
        }
    }
}
