// AST (Abstract Syntax Tree) definitions for the TypeScript subset

use std::fmt;

/// Source location information for log traces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binding keyword of a variable declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Let,
    Const,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level statements recognised by the parser.
///
/// Every text field holds the literal token text exactly as it appeared in
/// the source, so a string value keeps its surrounding double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// `let|const name [: Type] [= value] [;]`
    VariableDeclaration {
        kind: DeclarationKind,
        name: String,
        type_annotation: Option<String>,
        value: Option<String>,
        location: SourceLocation,
    },

    /// `console.log(arg, ...);`
    ConsoleLog {
        arguments: Vec<String>,
        location: SourceLocation,
    },
}

impl AstNode {
    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::VariableDeclaration { location, .. }
            | AstNode::ConsoleLog { location, .. } => *location,
        }
    }
}

/// Ordered sequence of top-level statements; order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub nodes: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Program { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
