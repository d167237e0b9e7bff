use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanExpression, FunctionLiteral, IdentifierExpression, IfExpression,
            InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_statement};

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token()?;

    Some(Expression::Identifier(IdentifierExpression {
        value: token.literal.clone(),
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token()?;
    // A digit run that overflows i64 produces nothing.
    let value = token.literal.parse().ok()?;

    Some(Expression::Integer(IntegerLiteral { value }))
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token()?;

    Some(Expression::Boolean(BooleanExpression {
        kind: token.kind,
        value: token.kind == TokenKind::True,
    }))
}

pub fn parse_prefix_expression(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token()?.clone();

    parser.next();
    let right = parser.parse_expression(Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        kind: token.kind,
        operator: token.literal,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expression(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let token = parser.current_token()?.clone();
    let precedence = parser.current_precedence();

    parser.next();
    // Re-entering at the operator's own precedence keeps equal-strength
    // operators left-associative.
    let right = parser.parse_expression(precedence)?;

    Some(Expression::Infix(InfixExpression {
        kind: token.kind,
        left: Box::new(left),
        operator: token.literal,
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expression(parser: &mut Parser) -> Option<Expression> {
    parser.next();
    let expression = parser.parse_expression(Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParenthesis) {
        return None;
    }

    Some(expression)
}

pub fn parse_if_expression(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::LParenthesis) {
        return None;
    }

    parser.next();
    let condition = parser.parse_expression(Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::RParenthesis) {
        return None;
    }

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let consequence = parse_block_statement(parser);

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next();

        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }

        Some(parse_block_statement(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::LParenthesis) {
        return None;
    }

    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let body = parse_block_statement(parser);

    Some(Expression::Function(FunctionLiteral { parameters, body }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpression>> {
    let mut parameters = Vec::new();

    // Immediate `)` is the zero-parameter case.
    if parser.peek_is(TokenKind::RParenthesis) {
        parser.next();
        return Some(parameters);
    }

    parser.next();
    parameters.push(parameter_name(parser)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.next();
        parser.next();
        parameters.push(parameter_name(parser)?);
    }

    if !parser.expect_peek(TokenKind::RParenthesis) {
        return None;
    }

    Some(parameters)
}

fn parameter_name(parser: &mut Parser) -> Option<IdentifierExpression> {
    let token = parser.current_token()?;

    if token.kind != TokenKind::Identifier {
        return None;
    }

    Some(IdentifierExpression {
        value: token.literal.clone(),
    })
}
