use std::fmt::Display;

use getset::{CopyGetters, Getters};

use crate::base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// Represents an error that occurred during the lexical analysis of the source code.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnexpectedCharacter(#[from] UnexpectedCharacter),
    #[error(transparent)]
    UnterminatedString(#[from] UnterminatedString),
}

impl Error {
    /// The line (starting at 1) the error is reported at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter(error) => error.line,
            Self::UnterminatedString(error) => error.line,
        }
    }

    /// A short description of the error without any source context.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter(error) => error.message(),
            Self::UnterminatedString(error) => error.message(),
        }
    }
}

/// Source code contains a character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct UnexpectedCharacter {
    /// Span of the offending character.
    #[get = "pub"]
    pub(crate) span: Span,

    /// Line the character is on.
    #[get_copy = "pub"]
    pub(crate) line: usize,

    /// The offending character.
    #[get_copy = "pub"]
    pub(crate) character: char,
}

impl UnexpectedCharacter {
    fn message(&self) -> String {
        format!("Unexpected character `{}`.", self.character.escape_debug())
    }
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("[line {}] {}", self.line, self.message())
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

impl std::error::Error for UnexpectedCharacter {}

/// A string literal reaches the end of the source code without a closing `"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct UnterminatedString {
    /// Span from the opening `"` to the end of the source code.
    #[get = "pub"]
    pub(crate) span: Span,

    /// Line the end of the source code was reached on.
    #[get_copy = "pub"]
    pub(crate) line: usize,
}

impl UnterminatedString {
    fn message(&self) -> String {
        "Unterminated string.".to_string()
    }
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("[line {}] {}", self.line, self.message())
            ),
            SourceCodeDisplay::new(
                &self.span,
                Some("this string is not closed by a matching `\"`")
            )
        )
    }
}

impl std::error::Error for UnterminatedString {}
