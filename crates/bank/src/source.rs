use quiz_core::{Question, QuestionDraft, QuestionError};
use thiserror::Error;

/// Errors surfaced by question sources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question {position} failed validation: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// Contract for loading the question list a quiz runs on.
///
/// The engine only sees validated questions; where they come from is a
/// collaborator concern, so a file or network loader can slot in behind
/// this trait without touching the quiz flow.
pub trait QuestionSource: Send + Sync {
    /// Load and validate the full question list.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` naming the first entry that
    /// fails validation.
    fn load(&self) -> Result<Vec<Question>, BankError>;
}

/// Validates a list of drafts, tagging failures with their 1-based position.
///
/// # Errors
///
/// Returns `BankError::InvalidQuestion` for the first draft that fails.
pub fn validate_drafts(drafts: Vec<QuestionDraft>) -> Result<Vec<Question>, BankError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| {
            draft
                .validate()
                .map_err(|source| BankError::InvalidQuestion {
                    position: i + 1,
                    source,
                })
        })
        .collect()
}

/// The built-in five-question general-knowledge set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestions;

impl BuiltinQuestions {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn drafts() -> Vec<QuestionDraft> {
        fn draft(text: &str, options: [&str; 4], correct: &str) -> QuestionDraft {
            QuestionDraft::new(
                text,
                options.iter().map(ToString::to_string).collect(),
                correct,
            )
        }

        vec![
            draft(
                "What is the capital of France?",
                ["Berlin", "Paris", "Rome", "Madrid"],
                "Paris",
            ),
            draft(
                "Which planet is known as the Red Planet?",
                ["Earth", "Mars", "Jupiter", "Saturn"],
                "Mars",
            ),
            draft(
                "Who wrote 'Hamlet'?",
                ["Charles Dickens", "William Shakespeare", "Leo Tolstoy", "Mark Twain"],
                "William Shakespeare",
            ),
            draft(
                "What is the largest ocean on Earth?",
                ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean", "Pacific Ocean"],
                "Pacific Ocean",
            ),
            draft(
                "What is the chemical symbol for water?",
                ["HO", "H2O", "O2H", "OH"],
                "H2O",
            ),
        ]
    }
}

impl QuestionSource for BuiltinQuestions {
    fn load(&self) -> Result<Vec<Question>, BankError> {
        validate_drafts(Self::drafts())
    }
}
