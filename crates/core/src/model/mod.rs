mod outcome;
mod question;
mod selection;
mod summary;

pub use outcome::{AnswerOutcome, AnswerRecord};
pub use question::{Question, QuestionDraft, QuestionError};
pub use selection::{ParseSelectionError, Selection};
pub use summary::{QuizSummary, SummaryError};
