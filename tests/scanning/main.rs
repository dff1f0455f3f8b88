use std::path::Path;

use lox_frontend::{
    base::{source_file::SourceFile, Error, FsProvider, SilentHandler},
    lexical::{
        token::{KeywordKind, Literal, TokenKind},
        Error as LexicalError,
    },
    TokenStream,
};

fn scan(name: &str, source: &str) -> (TokenStream, Vec<Error>) {
    let handler = SilentHandler::new();
    let tokens = lox_frontend::tokenize_str(&handler, name, source);
    (tokens, handler.into_errors())
}

#[test_log::test]
fn scanning_program() {
    let source = include_str!("./program.lox");
    let (tokens, errors) = scan("program.lox", source);

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let greeting = tokens
        .iter()
        .find(|token| token.kind() == TokenKind::String)
        .expect("string literal");
    assert_eq!(greeting.line(), 2);
    assert_eq!(
        greeting.literal(),
        &Some(Literal::Text("hello,\nworld".to_string()))
    );

    let keywords = tokens
        .iter()
        .filter_map(|token| token.kind().as_keyword().copied())
        .collect::<Vec<_>>();
    assert_eq!(
        keywords,
        vec![
            KeywordKind::Var,
            KeywordKind::Fun,
            KeywordKind::For,
            KeywordKind::Var,
            KeywordKind::If,
            KeywordKind::And,
            KeywordKind::Print,
            KeywordKind::Return,
            KeywordKind::Nil,
        ]
    );

    let number = tokens
        .iter()
        .rev()
        .find(|token| token.kind() == TokenKind::Number)
        .expect("number literal");
    assert_eq!(number.literal(), &Some(Literal::Number(3.5)));
    assert_eq!(number.line(), 10);

    assert_eq!(tokens.eof().line(), 11);
    assert!(tokens.windows(2).all(|pair| pair[0].line() <= pair[1].line()));
    for token in tokens.iter() {
        let span = token.span();
        assert_eq!(token.lexeme(), &source[span.start()..span.end()]);
    }
}

#[test_log::test]
fn scanning_invalid_keeps_going() {
    let (tokens, errors) = scan("invalid.lox", include_str!("./invalid.lox"));

    let errors = errors
        .into_iter()
        .map(|error| match error {
            Error::LexicalError(error) => error,
            other => panic!("expected a lexical error, got {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], LexicalError::UnexpectedCharacter(_)));
    assert_eq!(errors[0].line(), 1);
    assert!(matches!(errors[1], LexicalError::UnexpectedCharacter(_)));
    assert_eq!(errors[1].line(), 2);
    assert!(matches!(errors[2], LexicalError::UnterminatedString(_)));
    assert_eq!(errors[2].line(), 4);

    // everything around the bad characters is still there
    let first_line = tokens
        .iter()
        .take_while(|token| token.line() == 1)
        .map(|token| token.lexeme())
        .collect::<Vec<_>>();
    assert_eq!(first_line, vec!["var", "a", "=", "1", "2", ";"]);

    assert!(tokens.iter().all(|token| token.kind() != TokenKind::String));
    assert_eq!(tokens.eof().kind(), TokenKind::Eof);
    assert_eq!(tokens.eof().line(), 4);
}

#[test_log::test]
fn scanning_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("script.lox"), "print -1 <= 2;\n").unwrap();

    let handler = SilentHandler::new();
    let provider = FsProvider::from(dir.path());
    let tokens = lox_frontend::tokenize(&handler, &provider, Path::new("script.lox"))
        .expect("Failed to read script");

    assert!(!handler.has_received());
    let kinds = tokens.iter().map(|token| token.kind()).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword(KeywordKind::Print),
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::LessEqual,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens.eof().line(), 2);

    assert!(matches!(
        lox_frontend::tokenize(&handler, &provider, Path::new("missing.lox")),
        Err(Error::IoError(_))
    ));
}

#[test_log::test]
fn lexical_error_display_mentions_line() {
    let file = SourceFile::new("shown.lox", "ok\n  $");
    let handler = SilentHandler::new();
    let _ = TokenStream::tokenize(&file, &handler);

    let errors = handler.into_errors();
    assert_eq!(errors.len(), 1);

    colored::control::set_override(false);
    let shown = errors[0].to_string();
    assert!(shown.contains("[line 2] Unexpected character `$`."), "{shown}");
    assert!(shown.contains("shown.lox:2:3"), "{shown}");
    assert!(shown.contains("2 |   $"), "{shown}");
}
