//! The lexical module is responsible for converting raw text into a stream of tokens.

pub mod scanner;
pub mod token;
pub mod token_stream;

mod error;
pub use error::{Error, UnexpectedCharacter, UnterminatedString};
