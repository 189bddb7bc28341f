// Emission options for the JavaScript generator

/// How a declaration without an initializer is rendered.
///
/// `let x: number;` has no value to carry over. JavaScript accepts
/// `let x;` but rejects `const x;`, so the default spells the value out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValue {
    /// `let x = undefined;`
    #[default]
    Undefined,
    /// `let x;`
    Omit,
}

/// Options controlling [`super::Generator`] output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub missing_value: MissingValue,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_value(mut self, policy: MissingValue) -> Self {
        self.missing_value = policy;
        self
    }
}
