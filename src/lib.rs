//! # Introduction
//!
//! tscjs translates a small, explicitly enumerated subset of TypeScript into
//! JavaScript. Type annotations are discarded; everything else is carried
//! over token for token.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Generator → JavaScript
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds a flat list of statements.
//! 2. [`codegen`] — renders each statement as one line of JavaScript.
//! 3. [`driver`] — file I/O around the pipeline; used by the `tscjs` binary.
//!
//! Every stage is a pure function of its input and none of them can fail.
//! Malformed input is dropped, not rejected: unknown characters vanish in the
//! lexer and unrecognised or broken statements vanish in the parser.
//!
//! ## Supported subset
//!
//! ```text
//! let x: number = 5;          →  let x = 5;
//! const msg: string = "hi";   →  const msg = "hi";
//! console.log("a", b, 3);     →  console.log("a", b, 3);
//! ```

pub mod codegen;
pub mod driver;
pub mod parser;

use codegen::{EmitOptions, Generator};

/// Generated code together with what the parser kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transpiled {
    pub code: String,
    /// Number of statements that survived parsing
    pub statements: usize,
}

/// Transpile `source` with default [`EmitOptions`].
pub fn transpile(source: &str) -> String {
    transpile_with(source, &EmitOptions::default())
}

/// Transpile `source` with the given options, returning only the code.
pub fn transpile_with(source: &str, options: &EmitOptions) -> String {
    transpile_detailed(source, options).code
}

/// Tokenize, parse, then generate.
pub fn transpile_detailed(source: &str, options: &EmitOptions) -> Transpiled {
    let tokens = parser::tokenize(source);
    let program = parser::parse(tokens);
    Transpiled {
        code: Generator::new(options).generate(&program),
        statements: program.len(),
    }
}
