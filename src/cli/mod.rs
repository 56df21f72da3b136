mod handlers;
pub mod pager;
pub mod parse;
pub mod prompt;
pub mod report;

use std::io;

use clap::Parser;
use env_logger::Env;
pub use handlers::{farewell, session};
pub use parse::Cli;
pub use prompt::Console;

use crate::core::error::AppError;

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    // RUST_LOG still wins when set; logs go to stderr, away from the dialogue
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

pub fn run() -> Result<(), AppError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    let cfg = cli.config().inspect_err(|e| eprintln!("{e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), cfg.palette);

    let result = session(&mut console, &cfg);
    farewell(&mut console, result.as_ref().err())?;
    result
}
