//! # Bulkgate
//!
//! Batch request orchestration with all-or-nothing semantics: a batch of
//! inputs is normalized into indexed units, admitted against a size limit,
//! validated per item, delegated to a caller-supplied handler, and every
//! handler output is validated before assembly into one response per input
//! index.
//!
//! ## Features
//!
//! - **Index correspondence**: one response per input index, always, in
//!   batch order
//! - **All-or-nothing gates**: a single invalid input or malformed handler
//!   output aborts the whole batch with precise per-item diagnostics
//! - **Handler containment**: structurally invalid handler responses never
//!   reach the caller verbatim, and a handler that forgets a unit halts the
//!   process instead of returning inconsistent data
//! - **Localized error catalog**: integer error codes resolved to
//!   human-readable text at response-construction time
//! - **Stable wire shape**: `{index, status, errors: [{code, error}], ok}`
//!   round-trips through serde
//!
//! ## Quick Start
//!
//! ```rust
//! use bulkgate::{BatchConfig, BatchPipeline, RequestUnit, StructuralValidate, Violation};
//! use bulkgate::catalog::ErrorCatalog;
//! use serde::Serialize;
//! use std::sync::Arc;
//!
//! #[derive(Serialize)]
//! struct CreateUser {
//!     name: String,
//! }
//!
//! impl StructuralValidate for CreateUser {
//!     fn validate(&self) -> Vec<Violation> {
//!         if self.name.is_empty() {
//!             vec![Violation::new("name", "must not be empty")]
//!         } else {
//!             Vec::new()
//!         }
//!     }
//! }
//!
//! let pipeline = BatchPipeline::new(Arc::new(ErrorCatalog::builtin()), BatchConfig::new());
//!
//! let inputs = vec![CreateUser { name: "ada".into() }];
//! let responses = pipeline.process(inputs, |units: &mut [RequestUnit<CreateUser, String>]| {
//!     for unit in units.iter_mut() {
//!         let name = unit.input.as_ref().map(|u| u.name.clone()).unwrap_or_default();
//!         unit.ok(format!("created {name}"));
//!     }
//! });
//!
//! assert_eq!(responses[0].ok.as_deref(), Some("created ada"));
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod response;
pub mod validation;

// Re-export main types
pub use catalog::{ErrorCatalog, ErrorCode, MessageBundle};
pub use error::{PipelineError, Result};
pub use pipeline::{
    BatchConfig, BatchHandler, BatchPipeline, RequestUnit, process_batch, validate_outputs,
};
pub use response::{ErrorDetail, Response, Responses, Status};
pub use validation::{StructuralValidate, Violation};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
