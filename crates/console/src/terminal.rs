//! Stdio adapters for the quiz engine's answer-source and presenter ports.

use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use engine::{AnswerSource, Presenter};
use quiz_core::{Question, QuizSummary};

//
// ─── ANSWER SOURCE ─────────────────────────────────────────────────────────────
//

/// Line-oriented answer source over any buffered reader.
///
/// Production runs read stdin; tests feed byte slices. `next_line` is safe
/// to cancel mid-read, so a line the user was still typing when a countdown
/// expired is picked up by the next question instead of being lost.
pub struct LineAnswers<R> {
    lines: Lines<R>,
}

impl<R> LineAnswers<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

/// Answer source over the process's standard input.
pub type StdinAnswers = LineAnswers<BufReader<Stdin>>;

impl StdinAnswers {
    /// Reads answers from stdin.
    ///
    /// Tokio services stdin reads on a background blocking thread; a read
    /// parked there can outlive the quiz, which is why the binary exits the
    /// process explicitly instead of waiting for the runtime to drain.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> AnswerSource for LineAnswers<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }
}

//
// ─── PRESENTER ─────────────────────────────────────────────────────────────────
//

/// Renders the quiz to any writer, stdout in production.
///
/// Write failures are dropped on purpose: a quiz that cannot print has no
/// recovery path short of finishing, and answers are still graded.
pub struct TerminalPresenter<W> {
    out: W,
}

impl TerminalPresenter<io::Stdout> {
    /// Writes to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TerminalPresenter<W>
where
    W: Write + Send,
{
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Hands back the writer, mainly so tests can inspect captured output.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Presenter for TerminalPresenter<W>
where
    W: Write + Send,
{
    fn question(&mut self, question: &Question) {
        let _ = writeln!(self.out, "Question: {}", question.text());
        for (i, option) in question.options().iter().enumerate() {
            let _ = writeln!(self.out, "{}: {}", i + 1, option);
        }
    }

    fn countdown(&mut self, seconds_left: u32) {
        let _ = writeln!(self.out, "Time left: {seconds_left} seconds");
    }

    fn timeout_notice(&mut self) {
        let _ = writeln!(self.out, "Time's up! Moving to the next question.");
    }

    fn invalid_notice(&mut self) {
        let _ = writeln!(self.out, "Invalid input! Moving to the next question.");
    }

    fn summary(&mut self, summary: &QuizSummary) {
        let _ = writeln!(self.out, "Quiz Over!");
        let _ = writeln!(
            self.out,
            "Your Score: {}/{}",
            summary.score(),
            summary.total()
        );
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
