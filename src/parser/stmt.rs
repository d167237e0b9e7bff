use crate::{
    ast::{
        ast::Statement,
        expressions::IdentifierExpression,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

pub fn parse_let_statement(parser: &mut Parser) -> Option<Statement> {
    parser.next();

    let name = match parser.current_token() {
        Some(token) if token.kind == TokenKind::Identifier => IdentifierExpression {
            value: token.literal.clone(),
        },
        _ => return None,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: Parse the initializer expression instead of skipping it.
    while parser.current_token().is_some() && !parser.current_is(TokenKind::Semicolon) {
        parser.next();
    }

    Some(Statement::Let(LetStatement { name, value: None }))
}

pub fn parse_return_statement(parser: &mut Parser) -> Option<Statement> {
    // TODO: Parse the return value expression instead of skipping it.
    while parser.current_token().is_some() && !parser.current_is(TokenKind::Semicolon) {
        parser.next();
    }

    Some(Statement::Return(ReturnStatement { value: None }))
}

pub fn parse_expression_statement(parser: &mut Parser) -> Option<Statement> {
    let kind = parser.current_token()?.kind;
    let value = parser.parse_expression(Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::Semicolon) {
        return None;
    }

    Some(Statement::Expression(ExpressionStatement { kind, value }))
}

/// Parses the statements between `{` and `}`, entered with the opening
/// brace as the current token. Statements that fail to parse are skipped;
/// an unclosed block keeps whatever was read before the input ran out.
pub fn parse_block_statement(parser: &mut Parser) -> BlockStatement {
    let mut block = BlockStatement::default();

    parser.next();

    while parser.current_token().is_some() && !parser.current_is(TokenKind::RBrace) {
        if let Some(statement) = parser.parse_statement() {
            block.statements.push(statement);
        }

        parser.next();
    }

    block
}
