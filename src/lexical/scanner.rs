//! Contains the [`Scanner`], turning source text into [`Token`]s.

use std::{str::FromStr, sync::Arc};

use crate::base::{
    self,
    source_file::{SourceFile, SourceIterator, Span},
    Handler,
};

use super::{
    error::{UnexpectedCharacter, UnterminatedString},
    token::{KeywordKind, Token, TokenKind},
    token_stream::TokenStream,
};

/// Single pass scanner over one source file.
///
/// The scanner keeps two cursors: `start` marks the first byte of the lexeme currently being
/// recognized and the iterator's offset marks the scan position. A scanner is consumed by
/// [`Scanner::scan_tokens`] and cannot be reused.
#[derive(Debug)]
pub struct Scanner<'a> {
    iter: SourceIterator<'a>,
    start: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the beginning of the source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iter: source_file.iter(),
            start: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source file.
    ///
    /// Lexical errors are sent to the handler and scanning continues with the next character.
    /// The returned stream always ends with exactly one [`TokenKind::Eof`] token.
    #[must_use]
    pub fn scan_tokens(mut self, handler: &impl Handler<base::Error>) -> TokenStream {
        while !self.iter.is_at_end() {
            self.start = self.iter.offset();
            self.scan_token(handler);
        }

        let eof = Token::new(
            TokenKind::Eof,
            Span::at_end(self.iter.source_file().clone()),
            self.line,
        );
        self.tokens.push(eof);

        tracing::trace!(tokens = self.tokens.len(), lines = self.line, "Finished scanning");

        TokenStream::new(self.tokens)
    }

    fn scan_token(&mut self, handler: &impl Handler<base::Error>) {
        let Some((_, character)) = self.iter.next() else {
            return;
        };

        if let Some(kind) = TokenKind::single_punctuation(character) {
            self.add_token(kind);
        } else if let Some((single, with_equal)) = TokenKind::equal_operator(character) {
            let kind = if self.iter.next_if_eq('=') {
                with_equal
            } else {
                single
            };
            self.add_token(kind);
        } else {
            match character {
                '/' => {
                    if self.iter.next_if_eq('/') {
                        // line comment, the newline is left for the main loop
                        self.walk_while(|character| character != '\n');
                    } else {
                        self.add_token(TokenKind::Slash);
                    }
                }
                ' ' | '\r' | '\t' => {}
                '\n' => self.line += 1,
                '"' => self.handle_string(handler),
                c if c.is_ascii_digit() => self.handle_number(),
                c if is_identifier_start(c) => self.handle_identifier_and_keyword(),
                c => {
                    tracing::debug!(line = self.line, character = ?c, "Unexpected character");
                    handler.receive(
                        super::Error::from(UnexpectedCharacter {
                            span: self.current_span(),
                            line: self.line,
                            character: c,
                        })
                        .into(),
                    );
                }
            }
        }
    }

    /// Increments the iterator while the predicate returns true.
    fn walk_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(character) = self.iter.peek() {
            if !predicate(character) {
                break;
            }

            self.iter.next();
        }
    }

    /// Creates a span from `start` to the current scan position.
    fn current_span(&self) -> Span {
        Span::new(
            self.iter.source_file().clone(),
            self.start,
            self.iter.offset(),
        )
        .expect("scanner cursors are always on char boundaries")
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.current_span(), self.line);
        self.tokens.push(token);
    }

    /// Handles a sequence of characters that are enclosed in double quotes.
    fn handle_string(&mut self, handler: &impl Handler<base::Error>) {
        let start_line = self.line;

        while let Some(character) = self.iter.peek() {
            if character == '"' {
                break;
            }
            if character == '\n' {
                self.line += 1;
            }
            self.iter.next();
        }

        if self.iter.is_at_end() {
            tracing::debug!(line = self.line, "Unterminated string");
            handler.receive(
                super::Error::from(UnterminatedString {
                    span: self.current_span(),
                    line: self.line,
                })
                .into(),
            );
            return;
        }

        // the closing quote
        self.iter.next();

        let span = self.current_span();
        let content = {
            let lexeme = span.str();
            lexeme[1..lexeme.len() - 1].to_string()
        };
        self.tokens.push(Token::string(content, span, start_line));
    }

    /// Handles a sequence of digits with an optional fractional part.
    fn handle_number(&mut self) {
        self.walk_while(|character| character.is_ascii_digit());

        let has_fraction = self.iter.peek() == Some('.')
            && self
                .iter
                .peek_next()
                .is_some_and(|character| character.is_ascii_digit());
        if has_fraction {
            // consume the `.`
            self.iter.next();
            self.walk_while(|character| character.is_ascii_digit());
        }

        let span = self.current_span();
        let value = f64::from_str(span.str()).expect("digit runs always parse as f64");
        self.tokens.push(Token::number(value, span, self.line));
    }

    /// Handles a maximal run of identifier characters.
    fn handle_identifier_and_keyword(&mut self) {
        self.walk_while(is_identifier_character);

        let span = self.current_span();
        let kind = KeywordKind::from_str(span.str())
            .map_or(TokenKind::Identifier, TokenKind::Keyword);
        self.tokens.push(Token::new(kind, span, self.line));
    }
}

/// Checks if the given character is a valid first character of an identifier.
fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Checks if the given character is a valid character of an identifier.
fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}
