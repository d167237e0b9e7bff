use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator binding strengths, weakest first. Call is a declared level with
/// no registered operator; it exists so the table reads as the full ladder.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == or !=
    LessGreater, // < or >
    Sum,         // + or -
    Product,     // * or /
    Prefix,      // -x or !x
    Call,        // foo()
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.infix(TokenKind::Equal, Precedence::Equals, parse_infix_expression);
    parser.infix(TokenKind::NotEqual, Precedence::Equals, parse_infix_expression);

    // Relational. LessEqual/GreaterEqual deliberately have no handler: an
    // expression ends in front of them.
    parser.infix(
        TokenKind::LessThan,
        Precedence::LessGreater,
        parse_infix_expression,
    );
    parser.infix(
        TokenKind::GreaterThan,
        Precedence::LessGreater,
        parse_infix_expression,
    );

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expression);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expression);
    parser.infix(
        TokenKind::Asterisk,
        Precedence::Product,
        parse_infix_expression,
    );
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expression);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Integer, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Bang, parse_prefix_expression);
    parser.prefix(TokenKind::Minus, parse_prefix_expression);
    parser.prefix(TokenKind::LParenthesis, parse_grouped_expression);
    parser.prefix(TokenKind::If, parse_if_expression);
    parser.prefix(TokenKind::Function, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_statement);
    parser.stmt(TokenKind::Return, parse_return_statement);
}

// Lookup tables inside the parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
