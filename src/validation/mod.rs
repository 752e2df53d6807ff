//! Structural validation
//!
//! The trait boundary for the external validation collaborator plus the
//! built-in structural rules for the response model itself. The pipeline
//! runs a validator once per present input and once per produced output,
//! unless disabled by configuration.

mod response_validators;
mod trait_def;

#[cfg(test)]
mod tests;

pub use trait_def::{StructuralValidate, Violation};
