use crate::lexer::tokens::TokenKind;

use super::{
    ast::{Expression, Statement},
    expressions::IdentifierExpression,
};

/// `let` NAME `=` VALUE `;`
///
/// The value is currently always `None`: the parser skips the initializer
/// tokens without building the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub name: IdentifierExpression,
    pub value: Option<Expression>,
}

/// `return` VALUE `;`
///
/// The value is currently always `None`, as with `let`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

/// A bare expression used as a statement, e.g. `a + b;`. Tagged with the
/// kind of the statement's first token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub kind: TokenKind,
    pub value: Expression,
}

/// A `{`-delimited sequence of statements, owned in source order. Blocks
/// only occur inside if-expressions and function literals; a `{` at
/// statement level has no handler and parses to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}
