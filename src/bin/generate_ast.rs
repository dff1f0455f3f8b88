use std::path::PathBuf;

use clap::Parser;
use lox_frontend::{
    cli::{self, LoggingArgs},
    generate::{self, GeneratorConfig},
};

/// The args for running `generate_ast`
#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about = "Generates a syntax tree node hierarchy from a grammar description"
)]
struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Grammar description, one `Variant : Type field, ...` rule per line
    #[clap(value_name = "grammar file", value_hint = clap::ValueHint::FilePath)]
    grammar: PathBuf,
    /// Directory to place the generated file in, created if missing
    #[clap(value_name = "output dir", value_hint = clap::ValueHint::DirPath)]
    output_dir: PathBuf,
    /// Name of the generated node type
    #[clap(long, default_value = "Expression")]
    base_name: String,
    /// Path to `use` at the top of the generated file, replaces the default imports
    #[clap(long = "import", value_name = "PATH")]
    imports: Vec<String>,
    /// Maps a grammar type to a Rust type
    #[clap(long = "type-map", value_name = "FROM=TO", value_parser = parse_type_mapping)]
    type_map: Vec<(String, String)>,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new().with_base_name(&self.base_name);
        if !self.imports.is_empty() {
            config = config.with_imports(&self.imports);
        }
        self.type_map
            .iter()
            .fold(config, |config, (from, to)| config.with_type_mapping(from, to))
    }
}

fn parse_type_mapping(s: &str) -> Result<(String, String), String> {
    let invalid = || format!("expected `FROM=TO`, found `{s}`");

    let (from, to) = s.split_once('=').ok_or_else(invalid)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(invalid());
    }
    Ok((from.to_string(), to.to_string()))
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = cli::parse_args_or_exit();
    cli::init_logging(args.logging.log_level_filter())?;
    tracing::trace!("starting generate_ast with args: {args:?}");

    let config = args.config();
    let written = generate::generate_to_dir(&args.grammar, &args.output_dir, &config)?;

    println!("{}", written.display());

    Ok(())
}
