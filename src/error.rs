//! Error handling for the pipeline
//!
//! User-facing failures are never Rust errors: they are [`Response`]
//! values returned normally. This module covers the internal fallible
//! plumbing only. Programmer defects (catalog collisions, a handler leaving
//! a unit unset, a code-less client error) panic instead, so they unwind to
//! the process's top-level guard rather than being absorbed by ordinary
//! error handling.
//!
//! [`Response`]: crate::response::Response

use thiserror::Error;

/// Result type alias for the pipeline's internal stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Internal pipeline error.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The output-validation stage found handler-produced responses that
    /// violate the response model's structural rules.
    #[error("output validation failed for {failed} of {total} responses")]
    OutputValidation {
        /// Number of responses that failed validation.
        failed: usize,
        /// Number of responses checked.
        total: usize,
    },
}
