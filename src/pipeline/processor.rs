//! Batch orchestrator
//!
//! Wires the stages together: normalization, admission, input validation,
//! handler delegation, output validation and response assembly. Every
//! invocation returns exactly one response per input index; all-or-nothing
//! gates guarantee that a partially failed batch is never partially
//! executed or partially reported.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::catalog::{ErrorCatalog, codes};
use crate::error::{PipelineError, Result};
use crate::response::{self, ErrorDetail, Response, Status};
use crate::validation::StructuralValidate;

use super::types::{BatchConfig, BatchHandler, RequestUnit};

/// Batch orchestrator with an injected error catalog.
///
/// The catalog must be fully populated before the first call to
/// [`process`](Self::process); the pipeline only ever reads it.
pub struct BatchPipeline {
    catalog: Arc<ErrorCatalog>,
    config: BatchConfig,
}

impl BatchPipeline {
    /// Create a pipeline over `catalog` with the given options.
    pub fn new(catalog: Arc<ErrorCatalog>, config: BatchConfig) -> Self {
        Self { catalog, config }
    }

    /// Create a pipeline over a fresh built-in catalog.
    pub fn with_builtin(config: BatchConfig) -> Self {
        Self::new(Arc::new(ErrorCatalog::builtin()), config)
    }

    /// Current configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Process one batch: returns one response per input index, in order.
    ///
    /// # Panics
    /// Panics when the handler breaks its contract and leaves a unit
    /// without an output.
    pub fn process<I, T, H>(&self, inputs: Vec<I>, handler: H) -> Vec<Response<T>>
    where
        I: StructuralValidate + Serialize,
        T: StructuralValidate + Serialize,
        H: BatchHandler<I, T>,
    {
        process_with(&self.catalog, &self.config, inputs, handler)
    }
}

/// Process one batch against the process-wide catalog.
///
/// Convenience entry point for callers that populate [`crate::catalog`]
/// during startup; equivalent to [`BatchPipeline::process`].
pub fn process_batch<I, T, H>(inputs: Vec<I>, handler: H, config: BatchConfig) -> Vec<Response<T>>
where
    I: StructuralValidate + Serialize,
    T: StructuralValidate + Serialize,
    H: BatchHandler<I, T>,
{
    let catalog = crate::catalog::global().read();
    process_with(&catalog, &config, inputs, handler)
}

fn process_with<I, T, H>(
    catalog: &ErrorCatalog,
    config: &BatchConfig,
    inputs: Vec<I>,
    mut handler: H,
) -> Vec<Response<T>>
where
    I: StructuralValidate + Serialize,
    T: StructuralValidate + Serialize,
    H: BatchHandler<I, T>,
{
    let mut units = normalize(inputs);

    // Admission precedes content inspection: a shape violation of the whole
    // call, not a content violation of one item.
    if config.max_batch_size != 0 && units.len() > config.max_batch_size {
        warn!(
            count = units.len(),
            limit = config.max_batch_size,
            "batch rejected by admission limit"
        );
        response::fail_all(
            catalog,
            &mut units,
            Status::BadRequest,
            &[codes::MAX_REQUESTS_EXCEEDED],
        );
        return finalize(units);
    }

    let started = Instant::now();
    if !config.skip_input_validation {
        let rejected = validate_inputs(catalog, config.allow_empty_batch, &mut units);
        if rejected {
            // All-or-nothing gate: units that passed are aborted too. The
            // handler treats the batch as one transactional unit of work,
            // so a partially valid batch must never be partially executed.
            for unit in &mut units {
                if unit.output.is_none() {
                    unit.output = Some(response::client_aborted(catalog, unit.index));
                }
            }
            return finalize(units);
        }
    }
    let input_validation = started.elapsed();

    let started = Instant::now();
    handler.handle(&mut units);
    let handler_time = started.elapsed();

    let started = Instant::now();
    if !config.skip_output_validation {
        if let Err(error) = validate_outputs(catalog, &mut units) {
            warn!(%error, "batch aborted by output validation");
        }
    }
    let output_validation = started.elapsed();

    if config.debug_trace {
        trace_units(&units, input_validation, handler_time, output_validation);
    }

    finalize(units)
}

/// Normalize raw inputs into indexed units. An empty batch yields exactly
/// one unit with an absent input; whether that unit survives is decided by
/// input validation.
fn normalize<I, T>(inputs: Vec<I>) -> Vec<RequestUnit<I, T>> {
    if inputs.is_empty() {
        return vec![RequestUnit::new(0, None)];
    }

    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| RequestUnit::new(index, Some(input)))
        .collect()
}

/// Validate every unit's input, tagging failures. Evaluates the whole batch
/// even after a failure so diagnostics are complete. Returns whether any
/// unit was rejected.
fn validate_inputs<I, T>(
    catalog: &ErrorCatalog,
    allow_empty_batch: bool,
    units: &mut [RequestUnit<I, T>],
) -> bool
where
    I: StructuralValidate,
{
    let mut rejected = false;

    for unit in units.iter_mut() {
        match &unit.input {
            None => {
                if !allow_empty_batch {
                    unit.output = Some(response::bad_request(
                        catalog,
                        unit.index,
                        &[codes::EMPTY_REQUEST_NOT_ALLOWED],
                    ));
                    rejected = true;
                }
            }
            Some(input) => {
                let violations = input.validate();
                if !violations.is_empty() {
                    debug!(
                        index = unit.index,
                        count = violations.len(),
                        "input validation failed"
                    );
                    let errors = violations
                        .iter()
                        .map(|violation| ErrorDetail {
                            code: codes::INPUT_VALIDATION_FAILED,
                            error: violation.render(),
                        })
                        .collect();
                    unit.output = Some(Response {
                        index: unit.index,
                        status: Status::BadRequest,
                        errors,
                        ok: None,
                    });
                    rejected = true;
                }
            }
        }
    }

    rejected
}

/// Structurally validate every unit's handler-produced output.
///
/// A failing output is replaced with the internal-error response and logged
/// with its input/output dump; it never reaches the caller verbatim. If any
/// output failed, every passing unit is overwritten with the server-side
/// abort response and an error is returned.
///
/// Public for callers that run their own handler loop and want the same
/// safety net.
///
/// # Panics
/// Panics when a unit has no output: the handler broke its contract.
pub fn validate_outputs<I, T>(
    catalog: &ErrorCatalog,
    units: &mut [RequestUnit<I, T>],
) -> Result<()>
where
    I: Serialize,
    T: StructuralValidate + Serialize,
{
    let total = units.len();
    let mut failed: Vec<usize> = Vec::new();

    for unit in units.iter_mut() {
        let output = match &unit.output {
            Some(output) => output,
            None => panic!(
                "handler contract violated: unit {} has no output",
                unit.index
            ),
        };

        let violations = output.validate();
        if !violations.is_empty() {
            let rendered: Vec<String> = violations.iter().map(|v| v.render()).collect();
            error!(
                index = unit.index,
                violations = ?rendered,
                input = %json_dump(&unit.input),
                output = %json_dump(&unit.output),
                "response validation failed, replacing with internal error"
            );
            unit.output = Some(response::internal_error(catalog, unit.index));
            failed.push(unit.index);
        }
    }

    if failed.is_empty() {
        return Ok(());
    }

    // Deny by default: one untrustworthy output makes the whole execution
    // untrustworthy, so units that passed are aborted as well.
    for unit in units.iter_mut() {
        if !failed.contains(&unit.index) {
            unit.output = Some(response::server_aborted(catalog, unit.index));
        }
    }

    Err(PipelineError::OutputValidation {
        failed: failed.len(),
        total,
    })
}

/// Consume the batch into its ordered responses.
///
/// # Panics
/// Panics when a unit has no output: the handler broke its contract, and
/// returning malformed data would be worse than halting.
fn finalize<I, T>(units: Vec<RequestUnit<I, T>>) -> Vec<Response<T>> {
    units
        .into_iter()
        .map(|unit| match unit.output {
            Some(output) => output,
            None => panic!(
                "handler contract violated: unit {} has no output",
                unit.index
            ),
        })
        .collect()
}

fn trace_units<I, T>(
    units: &[RequestUnit<I, T>],
    input_validation: Duration,
    handler: Duration,
    output_validation: Duration,
) where
    I: Serialize,
    T: Serialize,
{
    for unit in units {
        debug!(
            index = unit.index,
            input = %json_dump(&unit.input),
            output = %json_dump(&unit.output),
            "batch unit trace"
        );
    }
    debug!(
        ?input_validation,
        ?handler,
        ?output_validation,
        "batch stage timings"
    );
}

fn json_dump<V: Serialize>(value: &V) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<serialization failed: {error}>"))
}
