//! Batch pipeline
//!
//! Admission, validation and orchestration of one batch invocation:
//! normalization into indexed units, the admission limit, per-item input
//! validation with the all-or-nothing abort rule, handler delegation,
//! output validation and ordered response assembly.

mod processor;
mod types;


pub use processor::{BatchPipeline, process_batch, validate_outputs};
pub use types::{BatchConfig, BatchHandler, RequestUnit};
