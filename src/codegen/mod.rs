//! JavaScript code generation
//!
//! - [`generator`]: walks a [`crate::parser::Program`] and renders one line
//!   per statement
//! - [`options`]: knobs for the few places where output is a policy choice
//!
//! Type annotations are dropped; every other piece of captured text is
//! reproduced verbatim.

pub mod generator;
pub mod options;

pub use generator::{generate, Generator};
pub use options::{EmitOptions, MissingValue};
