pub mod terminal;

pub use terminal::{LineAnswers, StdinAnswers, TerminalPresenter};
