#![forbid(unsafe_code)]

pub mod error;
pub mod interface;
pub mod progress;
pub mod runner;
pub mod session;
pub mod timer;

pub use quiz_core::Clock;

pub use error::{RunError, SessionError};
pub use interface::{AnswerSource, Presenter};
pub use progress::QuizProgress;
pub use runner::{DEFAULT_TIME_LIMIT_SECS, Runner};
pub use session::QuizSession;
pub use timer::{Countdown, CountdownEvent};
