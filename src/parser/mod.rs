//! TypeScript subset front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! - `let` / `const` declarations with an optional `: Type` annotation and an
//!   optional single-token initializer (string, number or identifier)
//! - `console.log(...)` calls whose arguments are strings, numbers or
//!   identifiers
//!
//! Anything else is skipped. Neither stage can fail: unknown characters and
//! unknown tokens are dropped rather than reported.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, DeclarationKind, Program, SourceLocation};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
