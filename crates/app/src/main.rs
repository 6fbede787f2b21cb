use bank::BuiltinQuestions;
use console::{StdinAnswers, TerminalPresenter};
use engine::{Clock, RunError, Runner};

async fn run() -> Result<(), RunError> {
    let runner = Runner::new(Clock::default());
    let mut answers = StdinAnswers::stdin();
    let mut presenter = TerminalPresenter::stdout();

    runner
        .run(&BuiltinQuestions::new(), &mut answers, &mut presenter)
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    // Stdin reads are serviced on a blocking thread; a timed-out question
    // can leave one parked there, and a clean runtime shutdown would wait
    // on it forever. Leave through the process instead.
    std::process::exit(code);
}
