pub mod model;
pub mod time;

pub use model::{
    AnswerOutcome, AnswerRecord, ParseSelectionError, Question, QuestionDraft, QuestionError,
    QuizSummary, Selection, SummaryError,
};
pub use time::{Clock, fixed_clock, fixed_now};
