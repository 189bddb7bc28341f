//! Forgiving statement parser
//!
//! This module provides the [`Parser`] struct, which walks the token stream
//! with an explicit cursor and recognises two statement forms:
//! - variable declarations: `let|const name [: Type] [= value] [;]`
//! - console calls: `console.log(arg, ...);`
//!
//! # Recovery policy
//!
//! The parser never reports an error. Tokens that start neither form are
//! skipped one at a time, and a statement that turns out malformed is
//! abandoned without emitting a node. Every loop iteration consumes at least
//! one token, so parsing always reaches the end of the stream.
//!
//! The two forms treat a missing `;` differently: a declaration is emitted
//! anyway, while a console call without its `;` is dropped.

use crate::parser::ast::*;
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Token kinds accepted as a declaration value or a call argument.
const VALUE_KINDS: [TokenKind; 3] = [
    TokenKind::String,
    TokenKind::Number,
    TokenKind::Identifier,
];

/// Cursor-based parser over a token sequence
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Lex `source` and wrap the resulting tokens.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source).tokenize())
    }

    /// Parse every top-level statement in the token stream
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.is_at_end() {
            let node = match self.peek().kind {
                TokenKind::Let | TokenKind::Const => self.parse_variable_declaration(),
                _ if self.at_console_log() => self.parse_console_log(),
                _ => {
                    let token = self.peek();
                    log::trace!("skipping stray {} at {}", token, token.location);
                    self.advance();
                    None
                }
            };

            if let Some(node) = node {
                log::trace!("parsed statement at {}", node.location());
                program.nodes.push(node);
            }
        }

        log::debug!("parsed {} statements", program.nodes.len());
        program
    }

    /// `let|const name [: Type] [= value] [;]`
    ///
    /// Cursor is on the `let`/`const` token.
    fn parse_variable_declaration(&mut self) -> Option<AstNode> {
        let keyword = self.advance()?;
        let location = keyword.location;
        let kind = match keyword.kind {
            TokenKind::Const => DeclarationKind::Const,
            _ => DeclarationKind::Let,
        };

        // Without a name the keyword is consumed and nothing is emitted.
        let Some(name) = self.match_kind(TokenKind::Identifier) else {
            log::debug!("abandoned {kind} declaration at {location}: no name");
            return None;
        };

        let mut type_annotation = None;
        if self.match_kind(TokenKind::Colon).is_some() {
            type_annotation = self.match_kind(TokenKind::Identifier);
        }

        let mut value = None;
        if self.match_kind(TokenKind::Equal).is_some() {
            value = self.match_any(&VALUE_KINDS);
        }

        self.match_kind(TokenKind::Semicolon);

        Some(AstNode::VariableDeclaration {
            kind,
            name,
            type_annotation,
            value,
            location,
        })
    }

    /// `console.log(arg, ...);`
    ///
    /// Cursor is on `console`; [`Parser::at_console_log`] has checked the
    /// next two tokens.
    fn parse_console_log(&mut self) -> Option<AstNode> {
        let location = self.peek().location;
        self.position += 3;

        if self.match_kind(TokenKind::LParen).is_none() {
            log::debug!("abandoned console.log at {location}: missing '('");
            self.advance();
            return None;
        }

        let mut arguments = Vec::new();
        while !self.is_at_end() && !self.check(TokenKind::RParen) {
            match self.match_any(&VALUE_KINDS) {
                Some(argument) => {
                    arguments.push(argument);
                    self.match_kind(TokenKind::Comma);
                }
                None => {
                    let token = self.peek();
                    log::trace!(
                        "skipping {} inside console.log at {}",
                        token,
                        token.location
                    );
                    self.advance();
                }
            }
        }

        if self.match_kind(TokenKind::RParen).is_none() {
            log::debug!("abandoned console.log at {location}: missing ')'");
            return None;
        }

        if self.match_kind(TokenKind::Semicolon).is_none() {
            // The token after ')' is dropped along with the call.
            log::debug!("abandoned console.log at {location}: missing ';'");
            self.advance();
            return None;
        }

        Some(AstNode::ConsoleLog {
            arguments,
            location,
        })
    }

    // ===== Helper methods =====

    /// Three-token lookahead for `console` `.` `log`.
    fn at_console_log(&self) -> bool {
        match self.tokens.get(self.position..self.position + 3) {
            Some([object, dot, method]) => {
                object.is(TokenKind::Identifier, "console")
                    && dot.kind == TokenKind::Dot
                    && method.is(TokenKind::Identifier, "log")
            }
            _ => false,
        }
    }

    /// Consume the current token if it has `kind`, returning its text.
    fn match_kind(&mut self, kind: TokenKind) -> Option<String> {
        self.match_any(&[kind])
    }

    /// Consume the current token if its kind is one of `kinds`.
    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<String> {
        let token = self.tokens.get(self.position)?;
        if kinds.contains(&token.kind) {
            let text = token.text.clone();
            self.position += 1;
            Some(text)
        } else {
            None
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|token| token.kind == kind)
    }

    /// Step past the current token; `None` once the stream is exhausted.
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

/// Parse a token sequence in one call.
pub fn parse(tokens: Vec<Token>) -> Program {
    Parser::new(tokens).parse_program()
}
