use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use lox_frontend::{
    base::{FsProvider, PrintHandler},
    cli::{self, LoggingArgs, EXIT_DATA_ERROR},
    TokenStream,
};

/// The args for running lox
#[derive(Debug, Parser)]
#[clap(author, version, about = "Scans Lox scripts and prints their tokens")]
struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Script to run, an interactive prompt is started if omitted
    #[clap(value_name = "script", value_hint = clap::ValueHint::FilePath)]
    script: Option<PathBuf>,
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args: Args = cli::parse_args_or_exit();
    cli::init_logging(args.logging.log_level_filter())?;
    tracing::trace!("starting lox with args: {args:?}");

    match &args.script {
        Some(path) => run_file(path),
        None => run_prompt(),
    }
}

fn run_file(path: &Path) -> eyre::Result<ExitCode> {
    let handler = PrintHandler::new();
    let tokens = lox_frontend::tokenize(&handler, &FsProvider::default(), path)?;
    print_tokens(&tokens)?;

    if handler.has_printed() {
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_prompt() -> eyre::Result<ExitCode> {
    let handler = PrintHandler::new();
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.is_empty() {
            break;
        }

        let tokens = lox_frontend::tokenize_str(&handler, "<prompt>", &line);
        print_tokens(&tokens)?;

        // one bad line does not affect the next one
        handler.reset();
    }

    Ok(ExitCode::SUCCESS)
}

fn print_tokens(tokens: &TokenStream) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for token in tokens.iter() {
        writeln!(stdout, "{token}")?;
    }
    Ok(())
}
