use std::path::Path;

use lox_frontend::{
    base::{Error, VoidHandler},
    generate::{self, GeneratorConfig, Grammar, GrammarError},
    lexical::token::Token,
    syntax::expression::{Binary, Expression, ExpressionVisitor, Grouping, Literal, Unary},
};

const GRAMMAR: &str = include_str!("../../grammar/expression.grammar");

#[test_log::test]
fn generating_expression_hierarchy() {
    let output =
        generate::generate(GRAMMAR, &GeneratorConfig::default()).expect("Failed to generate");

    assert!(output.contains(
        "pub trait ExpressionVisitor<T> {\n    /// Visits a [`Binary`] node.\n    fn visit_binary(&mut self, node: &Binary) -> T;\n    /// Visits a [`Grouping`] node.\n    fn visit_grouping(&mut self, node: &Grouping) -> T;\n    /// Visits a [`Literal`] node.\n    fn visit_literal(&mut self, node: &Literal) -> T;\n    /// Visits a [`Unary`] node.\n    fn visit_unary(&mut self, node: &Unary) -> T;\n}\n"
    ));
    assert!(output.contains(
        "pub struct Binary {\n    left: Box<Expression>,\n    operator_token: Token,\n    right: Box<Expression>,\n}\n"
    ));
    assert!(output.contains(
        "pub fn new(left: Box<Expression>, operator_token: Token, right: Box<Expression>) -> Self {\n        Self {\n            left,\n            operator_token,\n            right,\n        }\n"
    ));
    assert!(output.contains("pub struct Literal {\n    value: Option<token::Literal>,\n}\n"));
    assert!(output.contains("impl From<Unary> for Expression {\n"));

    let struct_order = [
        "pub struct Binary",
        "pub struct Grouping",
        "pub struct Literal",
        "pub struct Unary",
    ]
    .iter()
    .map(|needle| output.find(needle).expect("missing struct"))
    .collect::<Vec<_>>();
    assert!(struct_order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test_log::test]
fn generating_is_deterministic() {
    let config = GeneratorConfig::default();
    let first = generate::generate(GRAMMAR, &config).unwrap();
    let second = generate::generate(GRAMMAR, &config).unwrap();
    assert_eq!(first, second);

    let dir = tempfile::tempdir().unwrap();
    let grammar_path = dir.path().join("expression.grammar");
    std::fs::write(&grammar_path, GRAMMAR).unwrap();
    let output_dir = dir.path().join("out");

    let written = generate::generate_to_dir(&grammar_path, &output_dir, &config).unwrap();
    let first_bytes = std::fs::read(&written).unwrap();
    let rewritten = generate::generate_to_dir(&grammar_path, &output_dir, &config).unwrap();
    let second_bytes = std::fs::read(&rewritten).unwrap();

    assert_eq!(written, rewritten);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first_bytes, first.into_bytes());
}

#[test_log::test]
fn generating_creates_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let grammar_path = dir.path().join("stmt.grammar");
    std::fs::write(&grammar_path, "Print : Expression expression\n").unwrap();
    let output_dir = dir.path().join("nested").join("syntax");

    let config = GeneratorConfig::new().with_base_name("Stmt");
    let written = generate::generate_to_dir(&grammar_path, &output_dir, &config).unwrap();

    assert_eq!(written, output_dir.join("stmt.rs"));
    let generated = std::fs::read_to_string(written).unwrap();
    assert!(generated.contains("pub trait StmtVisitor<T> {"));
    // `Expression` is not the base type here, so it is not boxed
    assert!(generated.contains("    expression: Expression,\n"));
}

#[test_log::test]
fn generating_malformed_grammar_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let grammar_path = dir.path().join("broken.grammar");
    std::fs::write(
        &grammar_path,
        "Binary : Expression left, Token operatorToken, Expression right\nGrouping Expression expression\n",
    )
    .unwrap();
    let output_dir = dir.path().join("out");

    let err = generate::generate_to_dir(&grammar_path, &output_dir, &GeneratorConfig::default())
        .expect_err("Expecting generation failure");

    assert!(matches!(
        err,
        Error::GrammarError(GrammarError::MissingSeparator { line_number: 2, .. })
    ));
    assert!(!output_dir.exists());
}

#[test_log::test]
fn generating_keeps_previous_output_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let grammar_path = dir.path().join("expression.grammar");
    std::fs::write(&grammar_path, GRAMMAR).unwrap();
    let config = GeneratorConfig::default();

    let written = generate::generate_to_dir(&grammar_path, dir.path(), &config).unwrap();
    let before = std::fs::read(&written).unwrap();

    std::fs::write(&grammar_path, "Unary : Token\n").unwrap();
    assert!(generate::generate_to_dir(&grammar_path, dir.path(), &config).is_err());

    assert_eq!(std::fs::read(&written).unwrap(), before);
}

#[test_log::test]
fn generating_rejects_names_already_in_scope() {
    let err = generate::generate(
        "Token : Expression inner\nExpression : Token op",
        &GeneratorConfig::default(),
    )
    .expect_err("Expecting a name clash");
    assert_eq!(
        err,
        GrammarError::NameClash {
            line_number: 1,
            name: "Token".to_string(),
        }
    );

    let err = generate::generate("Unary : Tok<en op", &GeneratorConfig::default())
        .expect_err("Expecting an invalid type");
    assert!(matches!(err, GrammarError::InvalidType { line_number: 1, .. }));
}

#[test_log::test]
fn generating_boxes_optional_base_type() {
    let output = generate::generate(
        "Return : Token keyword, Option<Expression> value",
        &GeneratorConfig::default(),
    )
    .unwrap();

    assert!(output.contains("    value: Option<Box<Expression>>,\n"));
    assert!(output.contains("    pub fn value(&self) -> &Option<Box<Expression>> {\n"));
}

#[test_log::test]
fn generating_missing_grammar_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate::generate_to_dir(
        Path::new("does/not/exist.grammar"),
        dir.path(),
        &GeneratorConfig::default(),
    )
    .expect_err("Expecting io failure");

    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn grammar_rules_keep_declaration_order() {
    let grammar = Grammar::parse(GRAMMAR).unwrap();
    let names = grammar
        .rules()
        .iter()
        .map(|rule| rule.name().as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Binary", "Grouping", "Literal", "Unary"]);
    assert_eq!(grammar.rules()[0].line_number(), 2);
}

#[test]
fn checked_in_expression_nodes_are_up_to_date() {
    let checked_in = include_str!("../../src/syntax/expression.rs");
    let generated = generate::generate(GRAMMAR, &GeneratorConfig::default()).unwrap();

    assert_eq!(generated, checked_in);
}

/// Prints expressions in prefix notation, `(* (- 123) (group 45.67))`.
struct PrefixPrinter;

impl PrefixPrinter {
    fn parenthesize(&mut self, name: &str, expressions: &[&Expression]) -> String {
        let mut out = format!("({name}");
        for expression in expressions {
            out.push(' ');
            out.push_str(&expression.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExpressionVisitor<String> for PrefixPrinter {
    fn visit_binary(&mut self, node: &Binary) -> String {
        self.parenthesize(node.operator_token().lexeme(), &[node.left(), node.right()])
    }

    fn visit_grouping(&mut self, node: &Grouping) -> String {
        self.parenthesize("group", &[node.expression()])
    }

    fn visit_literal(&mut self, node: &Literal) -> String {
        node.value()
            .as_ref()
            .map_or_else(|| "nil".to_string(), ToString::to_string)
    }

    fn visit_unary(&mut self, node: &Unary) -> String {
        self.parenthesize(node.operator_token().lexeme(), &[node.right()])
    }
}

#[test_log::test]
fn expression_visitor_dispatches_to_each_variant() {
    let tokens = lox_frontend::tokenize_str(&VoidHandler, "expr.lox", "-123 * (45.67) nil");
    let [minus, one_two_three, star, _, forty_five, _, nil, _] =
        tokens.dissolve().try_into().unwrap();

    let literal = |token: &Token| {
        Box::new(Expression::from(Literal::new(token.literal().clone())))
    };
    let expression = Expression::from(Binary::new(
        Box::new(Unary::new(minus, literal(&one_two_three)).into()),
        star,
        Box::new(Grouping::new(literal(&forty_five)).into()),
    ));

    assert_eq!(expression.accept(&mut PrefixPrinter), "(* (- 123) (group 45.67))");
    assert_eq!(literal(&nil).accept(&mut PrefixPrinter), "nil");

    let Expression::Binary(binary) = &expression else {
        panic!("expected a binary expression, got {expression:?}");
    };
    assert!(matches!(binary.left(), Expression::Unary(_)));
    assert!(matches!(binary.right(), Expression::Grouping(_)));
}
