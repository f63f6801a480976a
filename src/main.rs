use std::process::ExitCode;

use tictactoe::io::TerminalIO;
use tictactoe::{cli, logging, GameEngine, Session};

fn main() -> ExitCode {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", cli::HELP);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", cli::HELP);
        return ExitCode::SUCCESS;
    }

    logging::init();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting session");

    let mut input = TerminalIO;
    let mut output = TerminalIO;
    let end = Session::new(GameEngine::new(seed), &mut input, &mut output).run();
    tracing::debug!(?end, "exiting");
    ExitCode::SUCCESS
}
