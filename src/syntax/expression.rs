// @generated by `generate_ast` from a grammar description. Do not edit by hand.

use crate::lexical::token::{self, Token};

/// Visitor over every [`Expression`] variant.
pub trait ExpressionVisitor<T> {
    /// Visits a [`Binary`] node.
    fn visit_binary(&mut self, node: &Binary) -> T;
    /// Visits a [`Grouping`] node.
    fn visit_grouping(&mut self, node: &Grouping) -> T;
    /// Visits a [`Literal`] node.
    fn visit_literal(&mut self, node: &Literal) -> T;
    /// Visits a [`Unary`] node.
    fn visit_unary(&mut self, node: &Unary) -> T;
}

/// Closed set of `Expression` nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A [`Binary`] node.
    Binary(Binary),
    /// A [`Grouping`] node.
    Grouping(Grouping),
    /// A [`Literal`] node.
    Literal(Literal),
    /// A [`Unary`] node.
    Unary(Unary),
}

impl Expression {
    /// Calls the visitor method matching the concrete node.
    pub fn accept<T, V: ExpressionVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Self::Binary(node) => node.accept(visitor),
            Self::Grouping(node) => node.accept(visitor),
            Self::Literal(node) => node.accept(visitor),
            Self::Unary(node) => node.accept(visitor),
        }
    }
}

/// `Binary` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    left: Box<Expression>,
    operator_token: Token,
    right: Box<Expression>,
}

impl Binary {
    /// Creates a new [`Binary`] node.
    #[must_use]
    pub fn new(left: Box<Expression>, operator_token: Token, right: Box<Expression>) -> Self {
        Self {
            left,
            operator_token,
            right,
        }
    }

    /// Gets the `left` field.
    #[must_use]
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// Gets the `operator_token` field.
    #[must_use]
    pub fn operator_token(&self) -> &Token {
        &self.operator_token
    }

    /// Gets the `right` field.
    #[must_use]
    pub fn right(&self) -> &Expression {
        &self.right
    }

    /// Calls [`ExpressionVisitor::visit_binary`] with this node.
    pub fn accept<T, V: ExpressionVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_binary(self)
    }
}

impl From<Binary> for Expression {
    fn from(node: Binary) -> Self {
        Self::Binary(node)
    }
}

/// `Grouping` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    expression: Box<Expression>,
}

impl Grouping {
    /// Creates a new [`Grouping`] node.
    #[must_use]
    pub fn new(expression: Box<Expression>) -> Self {
        Self {
            expression,
        }
    }

    /// Gets the `expression` field.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Calls [`ExpressionVisitor::visit_grouping`] with this node.
    pub fn accept<T, V: ExpressionVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_grouping(self)
    }
}

impl From<Grouping> for Expression {
    fn from(node: Grouping) -> Self {
        Self::Grouping(node)
    }
}

/// `Literal` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Option<token::Literal>,
}

impl Literal {
    /// Creates a new [`Literal`] node.
    #[must_use]
    pub fn new(value: Option<token::Literal>) -> Self {
        Self {
            value,
        }
    }

    /// Gets the `value` field.
    #[must_use]
    pub fn value(&self) -> &Option<token::Literal> {
        &self.value
    }

    /// Calls [`ExpressionVisitor::visit_literal`] with this node.
    pub fn accept<T, V: ExpressionVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_literal(self)
    }
}

impl From<Literal> for Expression {
    fn from(node: Literal) -> Self {
        Self::Literal(node)
    }
}

/// `Unary` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    operator_token: Token,
    right: Box<Expression>,
}

impl Unary {
    /// Creates a new [`Unary`] node.
    #[must_use]
    pub fn new(operator_token: Token, right: Box<Expression>) -> Self {
        Self {
            operator_token,
            right,
        }
    }

    /// Gets the `operator_token` field.
    #[must_use]
    pub fn operator_token(&self) -> &Token {
        &self.operator_token
    }

    /// Gets the `right` field.
    #[must_use]
    pub fn right(&self) -> &Expression {
        &self.right
    }

    /// Calls [`ExpressionVisitor::visit_unary`] with this node.
    pub fn accept<T, V: ExpressionVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        visitor.visit_unary(self)
    }
}

impl From<Unary> for Expression {
    fn from(node: Unary) -> Self {
        Self::Unary(node)
    }
}
