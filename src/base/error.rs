/// An error that occurred while scanning source code or generating a syntax tree schema.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("An error occurred while working with Input/Output: {0}")]
    IoError(String),
    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
    #[error("An error occurred while scanning the source code: {0}")]
    LexicalError(#[from] crate::lexical::Error),
    #[error("An error occurred while reading the grammar: {0}")]
    GrammarError(#[from] crate::generate::GrammarError),
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
