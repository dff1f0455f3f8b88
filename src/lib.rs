//! Front end of the Lox scripting language.
//!
//! Contains the lexical [scanner](lexical::scanner::Scanner) that turns source text into a
//! [`TokenStream`], and the [schema generator](generate) that turns a grammar description into
//! the source of a closed syntax tree node hierarchy. The [expression nodes](syntax::expression)
//! of Lox are generated that way.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
#[cfg(feature = "cli")]
pub mod cli;
pub mod generate;
pub mod lexical;
pub mod syntax;
mod util;

use std::path::Path;

use base::{source_file::SourceFile, FileProvider, Handler, Result};

pub use lexical::token_stream::TokenStream;

/// Converts the source file at the given path to tokens.
///
/// Lexical errors are sent to the handler; the returned stream still holds every token that could
/// be recognized.
///
/// # Errors
/// - If an error occurs while reading the file.
pub fn tokenize(
    handler: &impl Handler<base::Error>,
    provider: &impl FileProvider,
    path: &Path,
) -> Result<TokenStream> {
    let source_file = SourceFile::load(path, provider)?;

    Ok(TokenStream::tokenize(&source_file, handler))
}

/// Converts source code that is already in memory to tokens.
///
/// `name` is only used to label diagnostics.
#[must_use]
pub fn tokenize_str(handler: &impl Handler<base::Error>, name: &str, source: &str) -> TokenStream {
    let source_file = SourceFile::new(name, source);

    TokenStream::tokenize(&source_file, handler)
}
