//! Pipeline types

use crate::response::{Response, ok_response};

/// One indexed unit of work within a batch.
///
/// Created once per batch item at normalization time, or once with an
/// absent input when the batch is empty and empty batches are permitted.
/// `output` is write-once: the handler (or an abort path) must set it
/// exactly once before the pipeline returns, and a unit left without an
/// output at finalization is a fatal contract violation.
#[derive(Debug)]
pub struct RequestUnit<I, T> {
    /// Position of this unit in the original batch.
    pub index: usize,
    /// The caller-supplied input; `None` only for the synthesized unit of a
    /// permitted empty batch.
    pub input: Option<I>,
    /// The response for this unit, initially absent.
    pub output: Option<Response<T>>,
}

impl<I, T> RequestUnit<I, T> {
    /// Create a unit with no output yet.
    pub fn new(index: usize, input: Option<I>) -> Self {
        Self {
            index,
            input,
            output: None,
        }
    }

    /// Set a success output carrying `payload`, index-adjusted.
    pub fn ok(&mut self, payload: T) {
        self.output = Some(ok_response(self.index, payload));
    }
}

/// Recognized pipeline options.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Permit a batch of zero items to mean "process one implicit empty
    /// request" instead of rejecting it.
    pub allow_empty_batch: bool,
    /// Skip per-item input validation entirely.
    pub skip_input_validation: bool,
    /// Skip structural validation of handler outputs.
    pub skip_output_validation: bool,
    /// Maximum number of items admitted per batch; 0 means unlimited.
    pub max_batch_size: usize,
    /// Dump each unit's input/output pair and stage timings after
    /// processing. Never alters the returned responses.
    pub debug_trace: bool,
}

impl BatchConfig {
    /// Create a config with all options off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit the empty batch.
    pub fn with_allow_empty_batch(mut self, allow: bool) -> Self {
        self.allow_empty_batch = allow;
        self
    }

    /// Skip input validation.
    pub fn with_skip_input_validation(mut self, skip: bool) -> Self {
        self.skip_input_validation = skip;
        self
    }

    /// Skip output validation.
    pub fn with_skip_output_validation(mut self, skip: bool) -> Self {
        self.skip_output_validation = skip;
        self
    }

    /// Set the admission limit; 0 means unlimited.
    pub fn with_max_batch_size(mut self, max: usize) -> Self {
        self.max_batch_size = max;
        self
    }

    /// Enable the diagnostic trace dump.
    pub fn with_debug_trace(mut self, debug: bool) -> Self {
        self.debug_trace = debug;
        self
    }
}

/// The external collaborator that performs the business logic for a
/// validated batch.
///
/// Contract: set `.output` on every unit before returning. The pipeline
/// makes no assumption about the handler's internals, but a unit left
/// without an output is a fatal contract violation.
pub trait BatchHandler<I, T> {
    /// Handle every unit in the batch.
    fn handle(&mut self, units: &mut [RequestUnit<I, T>]);
}

impl<I, T, F> BatchHandler<I, T> for F
where
    F: FnMut(&mut [RequestUnit<I, T>]),
{
    fn handle(&mut self, units: &mut [RequestUnit<I, T>]) {
        self(units)
    }
}
