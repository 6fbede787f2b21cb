pub mod source;

pub use source::{BankError, BuiltinQuestions, QuestionSource, validate_drafts};
