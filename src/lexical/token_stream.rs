//! Contains the [`TokenStream`] struct.

use std::{fmt::Debug, sync::Arc};

use derive_more::Deref;

use crate::base::{self, source_file::SourceFile, Handler};

use super::{
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Is a list of tokens terminated by exactly one [`TokenKind::Eof`] token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the interpreter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl TokenStream {
    pub(super) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().map(Token::kind) == Some(TokenKind::Eof),
            "token stream must end with EOF"
        );
        Self { tokens }
    }

    /// Tokenizes the given source code.
    ///
    /// Lexical errors are sent to the handler; the stream still contains every token that could
    /// be recognized around them.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %source_file.path().display()))]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &impl Handler<base::Error>) -> Self {
        tracing::debug!(lines = source_file.line_amount(), "Scanning source code");

        Scanner::new(source_file).scan_tokens(handler)
    }

    /// Returns the terminating [`TokenKind::Eof`] token.
    #[must_use]
    pub fn eof(&self) -> &Token {
        self.tokens
            .last()
            .expect("token stream always ends with an EOF token")
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
