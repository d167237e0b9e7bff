//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser owns a two-token window (current, peek) refilled on demand
//! from the lexer, and the lookup tables driving expression parsing:
//!
//! - Statement handlers for `let` and `return`
//! - Prefix handlers for tokens that can start an expression
//! - Infix handlers for operators that extend a left operand
//! - Binding powers for operator precedence
//!
//! Nothing here throws or aborts: every parse function answers with
//! `Option`, and `None` means "produced nothing". Program and block parsing
//! skip such holes silently.

use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Program, Statement},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_expression_statement,
};

/// The main parser structure.
///
/// Bound to exactly one lexer for its lifetime; construction performs two
/// pulls so that both window slots are populated before the first parse
/// call.
pub struct Parser<'a> {
    /// The lexer the token window is refilled from
    lexer: &'a mut Lexer,
    /// The token being parsed
    current: Option<Token>,
    /// One token of lookahead
    peek: Option<Token>,
    /// Diagnostics channel for future structured error messages. Nothing
    /// writes to it yet.
    errors: Vec<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix (expression-starting) handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (left-extending) handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator binding powers
    precedence_lookup: PrecedenceLookup,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: &'a mut Lexer) -> Parser<'a> {
        let mut parser = Parser {
            lexer,
            current: None,
            peek: None,
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);

        parser.peek = parser.pull();
        parser.next();
        parser
    }

    /// One pull from the lexer. The window has no representation for a
    /// failed token, so a lexer error is absorbed as end-of-input.
    fn pull(&mut self) -> Option<Token> {
        self.lexer.next().unwrap_or(None)
    }

    /// Slides the window forward by one token.
    pub fn next(&mut self) {
        self.current = self.peek.take();
        self.peek = self.pull();
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn peek_token(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        matches!(&self.current, Some(token) if token.kind == kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        matches!(&self.peek, Some(token) if token.kind == kind)
    }

    /// Advances onto the peek token when it has the expected kind.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// The accumulated diagnostic messages. Always empty for now.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Binding power for a token kind; anything unregistered binds Lowest,
    /// which is what makes the climbing loop stop in front of it.
    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn current_precedence(&self) -> Precedence {
        match &self.current {
            Some(token) => self.precedence_of(token.kind),
            None => Precedence::Lowest,
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        match &self.peek {
            Some(token) => self.precedence_of(token.kind),
            None => Precedence::Lowest,
        }
    }

    /// Registers a statement handler for a token kind.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a prefix handler for a token kind. Prefix registration does
    /// not assign a binding power: a literal in peek position must read as
    /// Lowest or the climbing loop would never hand control back.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler and its binding power for a token kind.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Fills the supplied program with every statement that parses,
    /// silently skipping those that do not, until the input is exhausted.
    pub fn parse_program(&mut self, program: &mut Program) {
        while self.current.is_some() {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }

            self.next();
        }
    }

    /// Dispatches on the current token's kind; anything without a
    /// registered statement handler is a bare expression statement.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        let kind = self.current.as_ref()?.kind;

        match self.stmt_lookup.get(&kind).copied() {
            Some(handler) => handler(self),
            None => parse_expression_statement(self),
        }
    }

    /// Precedence climbing: parse one prefix expression for the current
    /// token, then keep extending it while the peek token is not a
    /// statement terminator and binds tighter than the caller's floor.
    /// Missing table entries end the expression rather than failing it.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let kind = self.current.as_ref()?.kind;
        let prefix = self.prefix_lookup.get(&kind).copied()?;

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let infix = match &self.peek {
                Some(token) => match self.infix_lookup.get(&token.kind).copied() {
                    Some(handler) => handler,
                    None => return Some(left),
                },
                None => return Some(left),
            };

            self.next();
            left = infix(self, left)?;
        }

        Some(left)
    }
}
