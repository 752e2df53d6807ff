//! Structural validation trait definition

/// A single constraint violation found by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `"name"` or `"errors[0].code"`.
    pub field: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl Violation {
    /// Create a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Render as `field: message`, or just the message when the field path
    /// is empty.
    pub fn render(&self) -> String {
        if self.field.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", self.field, self.message)
        }
    }
}

/// Structural validation over a value's declared constraints.
///
/// An empty violation list means the value is valid. Implement this for the
/// input and payload types flowing through the pipeline; the crate
/// implements it for its own response model.
pub trait StructuralValidate {
    /// Check the value and return every violation found.
    fn validate(&self) -> Vec<Violation>;
}

/// The unit payload is trivially valid; used by pipelines whose success
/// responses carry no body.
impl StructuralValidate for () {
    fn validate(&self) -> Vec<Violation> {
        Vec::new()
    }
}

impl StructuralValidate for String {
    fn validate(&self) -> Vec<Violation> {
        Vec::new()
    }
}

impl StructuralValidate for serde_json::Value {
    fn validate(&self) -> Vec<Violation> {
        Vec::new()
    }
}
