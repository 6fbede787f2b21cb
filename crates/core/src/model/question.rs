use thiserror::Error;

use crate::model::outcome::AnswerOutcome;
use crate::model::selection::Selection;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question data as supplied by a question source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// Checks the draft against the question invariants.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` if the prompt is blank, there are fewer than
    /// two options, an option is blank or repeated, or the correct answer is
    /// not one of the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::NotEnoughOptions {
                len: self.options.len(),
            });
        }
        for (i, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::BlankOption { position: i + 1 });
            }
            if self.options[..i].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing {
                answer: self.correct_answer,
            });
        }

        Ok(Question {
            text: self.text,
            options: self.options,
            correct_answer: self.correct_answer,
        })
    }
}

/// An immutable multiple-choice question.
///
/// Always holds at least two unique options, one of which is the correct
/// answer. Built through [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Returns the option text at the selected position, if in range.
    #[must_use]
    pub fn option(&self, selection: Selection) -> Option<&str> {
        self.options.get(selection.index()).map(String::as_str)
    }

    /// Grades a selection against the correct answer by exact text equality.
    ///
    /// An out-of-range selection grades as `Invalid`. Never returns
    /// `TimedOut`; that outcome belongs to the caller racing the countdown.
    #[must_use]
    pub fn grade(&self, selection: Selection) -> AnswerOutcome {
        match self.option(selection) {
            Some(text) if text == self.correct_answer => AnswerOutcome::Correct,
            Some(_) => AnswerOutcome::Wrong,
            None => AnswerOutcome::Invalid,
        }
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

/// Errors raised while validating a question draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("a question needs at least two options, got {len}")]
    NotEnoughOptions { len: usize },

    #[error("option {position} is blank")]
    BlankOption { position: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("correct answer {answer:?} is not among the options")]
    CorrectAnswerMissing { answer: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn sample() -> Question {
        QuestionDraft::new(
            "What is the capital of France?",
            options(&["Berlin", "Paris", "Rome", "Madrid"]),
            "Paris",
        )
        .validate()
        .unwrap()
    }

    #[test]
    fn draft_with_correct_answer_among_options_validates() {
        let question = sample();
        assert_eq!(question.text(), "What is the capital of France?");
        assert_eq!(question.option_count(), 4);
        assert_eq!(question.correct_answer(), "Paris");
    }

    #[test]
    fn draft_fails_if_correct_answer_not_among_options() {
        let err = QuestionDraft::new("Pick one", options(&["a", "b"]), "c")
            .validate()
            .unwrap_err();

        assert_eq!(
            err,
            QuestionError::CorrectAnswerMissing {
                answer: "c".to_string()
            }
        );
    }

    #[test]
    fn draft_fails_if_text_blank() {
        let err = QuestionDraft::new("   ", options(&["a", "b"]), "a")
            .validate()
            .unwrap_err();

        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn draft_fails_with_a_single_option() {
        let err = QuestionDraft::new("Pick one", options(&["a"]), "a")
            .validate()
            .unwrap_err();

        assert_eq!(err, QuestionError::NotEnoughOptions { len: 1 });
    }

    #[test]
    fn draft_fails_on_blank_option() {
        let err = QuestionDraft::new("Pick one", options(&["a", " "]), "a")
            .validate()
            .unwrap_err();

        assert_eq!(err, QuestionError::BlankOption { position: 2 });
    }

    #[test]
    fn draft_fails_on_repeated_option() {
        let err = QuestionDraft::new("Pick one", options(&["a", "b", "a"]), "a")
            .validate()
            .unwrap_err();

        assert_eq!(
            err,
            QuestionError::DuplicateOption {
                option: "a".to_string()
            }
        );
    }

    #[test]
    fn grading_matches_option_text() {
        let question = sample();

        assert_eq!(
            question.grade(Selection::new(2).unwrap()),
            AnswerOutcome::Correct
        );
        assert_eq!(
            question.grade(Selection::new(1).unwrap()),
            AnswerOutcome::Wrong
        );
    }

    #[test]
    fn grading_out_of_range_selection_is_invalid() {
        let question = sample();

        assert_eq!(
            question.grade(Selection::new(99).unwrap()),
            AnswerOutcome::Invalid
        );
    }
}
