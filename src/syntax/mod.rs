//! Syntax tree nodes of Lox.
//!
//! The node hierarchies are generated by `generate_ast` from the grammars in `grammar/` and
//! checked in, regenerate them after changing a grammar.

/// Expression nodes, generated from `grammar/expression.grammar`.
#[allow(clippy::ref_option)]
#[rustfmt::skip]
pub mod expression;
