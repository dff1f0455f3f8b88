//! Common pieces of the `lox` and `generate_ast` command line drivers.

use clap::{error::ErrorKind, value_parser, ArgAction, Args, Parser};
use tracing::level_filters::LevelFilter;

/// Exit status for invalid command line usage.
pub const EXIT_USAGE: u8 = 64;

/// Exit status for input data that produced errors.
pub const EXIT_DATA_ERROR: u8 = 65;

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// Log more, can be repeated up to three times
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=3), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, can be repeated up to two times
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[vv]` or `-q[q]` has been used.
    #[must_use]
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = i16::from(self.verbose) - i16::from(self.quiet);
        match sum {
            i16::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Installs a global subscriber printing log events at or above `level_filter` to stderr.
///
/// # Errors
/// - If a global subscriber has already been installed.
pub fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Parses the process arguments, exiting with [`EXIT_USAGE`] if they are invalid.
///
/// `--help` and `--version` still exit successfully.
#[must_use]
pub fn parse_args_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            // stdout/stderr may already be closed
            let _ = err.print();
            std::process::exit(i32::from(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn level(args: &str) -> LevelFilter {
        TestArgs::try_parse_from(args.split_whitespace())
            .expect("could not parse test string")
            .logging
            .log_level_filter()
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(level("test"), LevelFilter::WARN);
        assert_eq!(level("test -v"), LevelFilter::INFO);
        assert_eq!(level("test -vv"), LevelFilter::DEBUG);
        assert_eq!(level("test -vvv"), LevelFilter::TRACE);
        assert_eq!(level("test -q"), LevelFilter::ERROR);
        assert_eq!(level("test -qq"), LevelFilter::OFF);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q"]).is_err());
    }
}
