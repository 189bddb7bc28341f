//! Lexer (tokenizer) for the TypeScript subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. At each position the rules in [`RULES`] are tried in order and the
//! first one that matches wins, even when a later rule would match a longer
//! span. Whitespace is discarded, and a character no rule accepts is skipped
//! without producing a token or an error.

use super::ast::SourceLocation;
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Closed set of token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Equal,
    Let,
    Const,
    Colon,
    Semicolon,
    LParen,
    RParen,
    Comma,
    String,
    Dot,
}

impl TokenKind {
    /// Dedicated kind for a reserved word, if `text` is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "let" => Some(TokenKind::Let),
            "const" => Some(TokenKind::Const),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Equal => "EQUAL",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::String => "STRING",
            TokenKind::Dot => "DOT",
        };
        f.write_str(name)
    }
}

/// A classified slice of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }

    /// True if this token has the given kind and literal text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// How a rule recognises its lexeme at the current position.
enum Pattern {
    /// Exact character sequence.
    Literal(&'static str),
    /// Scanner returning the length in chars of the match, if any.
    Scan(fn(&[char]) -> Option<usize>),
}

impl Pattern {
    fn match_at(&self, input: &[char]) -> Option<usize> {
        match self {
            Pattern::Literal(literal) => match_literal(input, literal),
            Pattern::Scan(scan) => scan(input),
        }
    }
}

/// One lexical rule. `kind` is `None` for lexemes that are discarded.
struct Rule {
    kind: Option<TokenKind>,
    pattern: Pattern,
}

const fn rule(kind: TokenKind, pattern: Pattern) -> Rule {
    Rule {
        kind: Some(kind),
        pattern,
    }
}

/// Lexical rules in priority order.
///
/// `let` and `const` sit behind the identifier rule and never win on their
/// own; keywords reach their dedicated kinds through reclassification.
const RULES: &[Rule] = &[
    rule(TokenKind::Number, Pattern::Scan(match_number)),
    rule(TokenKind::Identifier, Pattern::Scan(match_identifier)),
    rule(TokenKind::Equal, Pattern::Literal("=")),
    rule(TokenKind::Let, Pattern::Literal("let")),
    rule(TokenKind::Const, Pattern::Literal("const")),
    rule(TokenKind::Colon, Pattern::Literal(":")),
    rule(TokenKind::Semicolon, Pattern::Literal(";")),
    rule(TokenKind::LParen, Pattern::Literal("(")),
    rule(TokenKind::RParen, Pattern::Literal(")")),
    rule(TokenKind::Comma, Pattern::Literal(",")),
    rule(TokenKind::String, Pattern::Scan(match_string)),
    Rule {
        kind: None,
        pattern: Pattern::Scan(match_whitespace),
    },
    rule(TokenKind::Dot, Pattern::Literal(".")),
];

/// Any Unicode decimal digit (category Nd), not only `0-9`.
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

fn match_number(input: &[char]) -> Option<usize> {
    let len = input.iter().take_while(|c| is_decimal_digit(**c)).count();
    (len > 0).then_some(len)
}

fn match_identifier(input: &[char]) -> Option<usize> {
    match input.first() {
        Some(c) if c.is_ascii_alphabetic() || *c == '_' => {
            let rest = input[1..]
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
                .count();
            Some(1 + rest)
        }
        _ => None,
    }
}

fn match_literal(input: &[char], literal: &str) -> Option<usize> {
    let len = literal.chars().count();
    if input.len() >= len && input.iter().copied().take(len).eq(literal.chars()) {
        Some(len)
    } else {
        None
    }
}

/// `"` then any run of non-quote characters then `"`. No escapes.
fn match_string(input: &[char]) -> Option<usize> {
    if input.first() != Some(&'"') {
        return None;
    }
    input[1..]
        .iter()
        .position(|c| *c == '"')
        .map(|close| close + 2)
}

fn match_whitespace(input: &[char]) -> Option<usize> {
    let len = input.iter().take_while(|c| c.is_whitespace()).count();
    (len > 0).then_some(len)
}

/// Lexer for the TypeScript subset
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input. Never fails.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let loc = self.current_location();
            let rest = &self.input[self.position..];

            let matched = RULES
                .iter()
                .find_map(|rule| rule.pattern.match_at(rest).map(|len| (rule.kind, len)));

            match matched {
                Some((kind, len)) => {
                    let text = self.take(len);
                    if let Some(kind) = kind {
                        tokens.push(Self::classify(kind, text, loc));
                    }
                }
                None => {
                    let skipped = self.take(1);
                    log::trace!("skipping unrecognised character {skipped:?} at {loc}");
                }
            }
        }

        log::debug!("lexed {} tokens", tokens.len());
        tokens
    }

    /// Reclassify keyword identifiers before the token is emitted.
    fn classify(kind: TokenKind, text: String, loc: SourceLocation) -> Token {
        let kind = match kind {
            TokenKind::Identifier => TokenKind::keyword(&text).unwrap_or(kind),
            other => other,
        };
        Token::new(kind, text, loc)
    }

    /// Consume `len` chars, tracking line and column.
    fn take(&mut self, len: usize) -> String {
        let end = (self.position + len).min(self.input.len());
        let text: String = self.input[self.position..end].iter().collect();

        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position = end;

        text
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
