//! Utility functions for the Lox front end.

use std::borrow::Cow;

/// Words that cannot be used as plain Rust identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Path keywords, which are not allowed as raw identifiers either.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Converts `camelCase` and `PascalCase` words into `snake_case`.
///
/// Runs of capitals are kept together, so `parseHTTPHeader` becomes `parse_http_header`.
#[must_use]
pub fn to_snake_case(s: &str) -> Cow<str> {
    if !s.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(s);
    }

    let chars = s.chars().collect::<Vec<_>>();
    let mut snake = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();

            let starts_word = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
                || (prev.is_some_and(|p| p.is_ascii_uppercase())
                    && next.is_some_and(|n| n.is_ascii_lowercase()));

            if starts_word && !snake.ends_with('_') {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }

    Cow::Owned(snake)
}

/// Prefixes Rust keywords with `r#` so they can be used as identifiers.
///
/// Path keywords get a trailing `_` instead.
#[must_use]
pub fn escape_keyword(ident: &str) -> Cow<str> {
    if PATH_KEYWORDS.contains(&ident) {
        Cow::Owned(format!("{ident}_"))
    } else if is_rust_keyword(ident) {
        Cow::Owned(format!("r#{ident}"))
    } else {
        Cow::Borrowed(ident)
    }
}

/// Whether the identifier is reserved by Rust.
#[must_use]
pub fn is_rust_keyword(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident) || PATH_KEYWORDS.contains(&ident)
}

/// Whether the string is a plain ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`).
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
