//! The generate module turns a grammar description into the source of a closed node hierarchy.
//!
//! Generation happens in two steps: [`Grammar::parse`] builds an in-memory description of the
//! variants and their fields, then [`render`] formats it. Nothing is written unless both steps
//! succeed.

pub mod config;
mod error;
pub mod grammar;
pub mod render;

use std::{
    io::Write,
    path::{Path, PathBuf},
};

#[doc(inline)]
pub use config::GeneratorConfig;
#[doc(inline)]
#[allow(clippy::module_name_repetitions)]
pub use error::GrammarError;
#[doc(inline)]
pub use grammar::Grammar;
#[doc(inline)]
pub use render::render;

use crate::base::{self, FileProvider, FsProvider};

/// Generates the node hierarchy source for the given grammar description.
///
/// # Errors
/// - [`GrammarError`] if any line of the grammar is malformed.
/// - [`GrammarError`] if a name or type would not compile next to the configured base type and
///   imports.
pub fn generate(grammar_source: &str, config: &GeneratorConfig) -> Result<String, GrammarError> {
    let grammar = Grammar::parse(grammar_source)?;
    grammar.validate(config)?;

    Ok(render(&grammar, config))
}

/// Reads the grammar file, generates the node hierarchy and writes it into `output_dir`.
///
/// The output directory is created if it does not exist. The file is first written to a
/// temporary file next to its final location and then moved into place, so the target is either
/// fully replaced or left untouched.
///
/// Returns the path of the written file.
///
/// # Errors
/// - [`base::Error::IoError`] if the grammar cannot be read or the output cannot be written.
/// - [`base::Error::GrammarError`] if any line of the grammar is malformed.
#[tracing::instrument(level = "debug", skip(config), fields(base_name = %config.base_name()))]
pub fn generate_to_dir(
    grammar_path: &Path,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> base::Result<PathBuf> {
    let provider = FsProvider::default();
    let grammar_source = provider.read_str(grammar_path)?;
    let source = generate(&grammar_source, config)?;

    if output_dir.is_dir() {
        tracing::debug!("Output directory: {}", output_dir.display());
    } else {
        tracing::info!("Creating output directory: {}", output_dir.display());
        std::fs::create_dir_all(output_dir).map_err(|err| io_error(output_dir, &err))?;
    }

    let target = output_dir.join(config.file_name());

    let mut file =
        tempfile::NamedTempFile::new_in(output_dir).map_err(|err| io_error(output_dir, &err))?;
    file.write_all(source.as_bytes())
        .map_err(|err| io_error(file.path(), &err))?;
    file.persist(&target)
        .map_err(|err| io_error(&target, &err.error))?;

    tracing::info!("Wrote {}", target.display());

    Ok(target)
}

fn io_error(path: &Path, err: &std::io::Error) -> base::Error {
    base::Error::IoError(format!("{}: {err}", path.display()))
}
