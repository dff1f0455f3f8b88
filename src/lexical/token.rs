//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::base::source_file::Span;

/// Is an enumeration representing keywords in Lox.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the Lox programming language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    // single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // one or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // literals
    Identifier,
    String,
    Number,

    Keyword(KeywordKind),

    Eof,
}

impl TokenKind {
    /// Gets the kind of a token made of exactly the given punctuation character.
    ///
    /// Characters that may start a two character operator or a comment are not covered.
    #[must_use]
    pub fn single_punctuation(character: char) -> Option<Self> {
        let kind = match character {
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            ',' => Self::Comma,
            '.' => Self::Dot,
            '-' => Self::Minus,
            '+' => Self::Plus,
            ';' => Self::Semicolon,
            '*' => Self::Star,
            _ => return None,
        };

        Some(kind)
    }

    /// Gets the one and two character forms of an operator whose second character is `=`.
    ///
    /// Returns `(single, with_equal)`.
    #[must_use]
    pub fn equal_operator(character: char) -> Option<(Self, Self)> {
        match character {
            '!' => Some((Self::Bang, Self::BangEqual)),
            '=' => Some((Self::Equal, Self::EqualEqual)),
            '<' => Some((Self::Less, Self::LessEqual)),
            '>' => Some((Self::Greater, Self::GreaterEqual)),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Keyword(keyword) => {
                return write!(f, "{}", keyword.as_str().to_ascii_uppercase());
            }
            Self::Eof => "EOF",
        };

        f.write_str(name)
    }
}

/// The value carried by a literal token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner)]
pub enum Literal {
    /// Value of a [`TokenKind::Number`] token.
    Number(f64),
    /// Content of a [`TokenKind::String`] token, without the surrounding quotes.
    Text(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A single lexeme of the source code together with its classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,
    /// Get the span that makes up the token.
    #[get = "pub"]
    span: Span,
    /// Get the literal value, present only on number and string tokens.
    #[get = "pub"]
    literal: Option<Literal>,
    /// Get the line (starting at 1) the token starts on.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Creates a token that carries no literal value.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self {
            kind,
            span,
            literal: None,
            line,
        }
    }

    /// Creates a [`TokenKind::Number`] token.
    #[must_use]
    pub fn number(value: f64, span: Span, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            span,
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// Creates a [`TokenKind::String`] token.
    #[must_use]
    pub fn string(content: impl Into<String>, span: Span, line: usize) -> Self {
        Self {
            kind: TokenKind::String,
            span,
            literal: Some(Literal::Text(content.into())),
            line,
        }
    }

    /// Returns the exact source text of the token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.span.str()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme())?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::base::source_file::SourceFile;

    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for keyword in KeywordKind::iter() {
            assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
        }
        assert_eq!(KeywordKind::iter().count(), 16);
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(KeywordKind::from_str("forest"), Err(KeywordParseError));
        assert_eq!(KeywordKind::from_str("While"), Err(KeywordParseError));
        assert_eq!(KeywordKind::from_str("while"), Ok(KeywordKind::While));
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::Keyword(KeywordKind::Fun).to_string(), "FUN");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let file = SourceFile::new("test.lox", "12.5 \"hi\" x");
        let number = Token::number(12.5, Span::new(file.clone(), 0, 4).unwrap(), 1);
        let string = Token::string("hi", Span::new(file.clone(), 5, 9).unwrap(), 1);
        let identifier = Token::new(TokenKind::Identifier, Span::new(file, 10, 11).unwrap(), 1);

        assert_eq!(number.to_string(), "NUMBER 12.5 12.5");
        assert_eq!(string.to_string(), "STRING \"hi\" hi");
        assert_eq!(identifier.to_string(), "IDENTIFIER x null");
    }
}
