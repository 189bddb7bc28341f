//! AST → JavaScript text
//!
//! Each node becomes exactly one line terminated by `\n`, in AST order:
//!
//! ```text
//! VariableDeclaration  →  <kind> <name> = <value>;
//! ConsoleLog           →  console.log(<arg>, <arg>, ...);
//! ```

use super::options::{EmitOptions, MissingValue};
use crate::parser::ast::{AstNode, Program};

/// Renders a [`Program`] as JavaScript source
pub struct Generator<'a> {
    options: &'a EmitOptions,
    output: String,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a EmitOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    /// Render every node of `program`, consuming the generator.
    pub fn generate(mut self, program: &Program) -> String {
        for node in &program.nodes {
            self.emit_node(node);
        }
        log::debug!(
            "generated {} lines ({} bytes)",
            program.nodes.len(),
            self.output.len()
        );
        self.output
    }

    fn emit_node(&mut self, node: &AstNode) {
        let line = match node {
            AstNode::VariableDeclaration { kind, name, value, .. } => {
                match (value, self.options.missing_value) {
                    (Some(value), _) => format!("{kind} {name} = {value};"),
                    (None, MissingValue::Undefined) => format!("{kind} {name} = undefined;"),
                    (None, MissingValue::Omit) => format!("{kind} {name};"),
                }
            }
            AstNode::ConsoleLog { arguments, .. } => {
                format!("console.log({});", arguments.join(", "))
            }
        };
        self.output.push_str(&line);
        self.output.push('\n');
    }
}

/// Generate JavaScript for `program` with default options.
pub fn generate(program: &Program) -> String {
    Generator::new(&EmitOptions::default()).generate(program)
}
