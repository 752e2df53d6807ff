//! Response builders
//!
//! Pure construction functions; their only side effect is reading the error
//! catalog. Client-error builders require at least one code because a
//! code-less client error is unreportable to the caller.

use crate::catalog::{DEFAULT_LOCALE, ErrorCatalog, ErrorCode, codes};
use crate::pipeline::RequestUnit;

use super::types::{ErrorDetail, Response, Status};

/// Build an error response, resolving every code through the catalog.
pub fn error_response<T>(
    catalog: &ErrorCatalog,
    index: usize,
    status: Status,
    codes: &[ErrorCode],
) -> Response<T> {
    let errors = codes
        .iter()
        .map(|&code| ErrorDetail {
            code,
            error: catalog.resolve(code, DEFAULT_LOCALE).to_string(),
        })
        .collect();

    Response {
        index,
        status,
        errors,
        ok: None,
    }
}

/// Build a success response carrying `payload`.
pub fn ok_response<T>(index: usize, payload: T) -> Response<T> {
    Response {
        index,
        status: Status::Ok,
        errors: Vec::new(),
        ok: Some(payload),
    }
}

/// Build a bad-request response.
///
/// # Panics
/// Panics when `codes` is empty.
pub fn bad_request<T>(catalog: &ErrorCatalog, index: usize, codes: &[ErrorCode]) -> Response<T> {
    if codes.is_empty() {
        panic!("no error codes supplied for bad-request response");
    }
    error_response(catalog, index, Status::BadRequest, codes)
}

/// Build a not-found response.
///
/// # Panics
/// Panics when `codes` is empty.
pub fn not_found<T>(catalog: &ErrorCatalog, index: usize, codes: &[ErrorCode]) -> Response<T> {
    if codes.is_empty() {
        panic!("no error codes supplied for not-found response");
    }
    error_response(catalog, index, Status::NotFound, codes)
}

/// Build an internal-error response carrying `INTERNAL_SERVER_ERROR`.
pub fn internal_error<T>(catalog: &ErrorCatalog, index: usize) -> Response<T> {
    error_response(
        catalog,
        index,
        Status::InternalError,
        &[codes::INTERNAL_SERVER_ERROR],
    )
}

/// Build a service-unavailable response. Carries no errors and no payload.
pub fn service_unavailable<T>(index: usize) -> Response<T> {
    Response {
        index,
        status: Status::ServiceUnavailable,
        errors: Vec::new(),
        ok: None,
    }
}

/// Client-facing abort: the item was fine but a sibling failed.
pub fn client_aborted<T>(catalog: &ErrorCatalog, index: usize) -> Response<T> {
    not_found(catalog, index, &[codes::OPERATION_ABORTED])
}

/// Server-facing abort: a sibling's output failed validation.
pub fn server_aborted<T>(catalog: &ErrorCatalog, index: usize) -> Response<T> {
    error_response(
        catalog,
        index,
        Status::InternalError,
        &[codes::OPERATION_ABORTED],
    )
}

/// Overwrite every unit's output with the same error response,
/// index-adjusted. Used by the orchestrator's all-or-nothing abort paths.
pub fn fail_all<I, T>(
    catalog: &ErrorCatalog,
    units: &mut [RequestUnit<I, T>],
    status: Status,
    codes: &[ErrorCode],
) {
    for unit in units {
        unit.output = Some(error_response(catalog, unit.index, status, codes));
    }
}

/// Fail every unit with the client-facing abort response.
pub fn fail_all_client_aborted<I, T>(catalog: &ErrorCatalog, units: &mut [RequestUnit<I, T>]) {
    fail_all(catalog, units, Status::NotFound, &[codes::OPERATION_ABORTED]);
}

/// Fail every unit with the server-facing abort response.
pub fn fail_all_server_aborted<I, T>(catalog: &ErrorCatalog, units: &mut [RequestUnit<I, T>]) {
    fail_all(
        catalog,
        units,
        Status::InternalError,
        &[codes::OPERATION_ABORTED],
    );
}

/// Fail every unit with the internal-error response.
pub fn fail_all_internal_error<I, T>(catalog: &ErrorCatalog, units: &mut [RequestUnit<I, T>]) {
    fail_all(
        catalog,
        units,
        Status::InternalError,
        &[codes::INTERNAL_SERVER_ERROR],
    );
}

/// Fail every unit with a not-found response carrying `codes`.
///
/// # Panics
/// Panics when `codes` is empty.
pub fn fail_all_not_found<I, T>(
    catalog: &ErrorCatalog,
    units: &mut [RequestUnit<I, T>],
    codes: &[ErrorCode],
) {
    if codes.is_empty() {
        panic!("no error codes supplied for not-found response");
    }
    fail_all(catalog, units, Status::NotFound, codes);
}

/// Fail every unit with the body-less service-unavailable response.
pub fn fail_all_service_unavailable<I, T>(units: &mut [RequestUnit<I, T>]) {
    for unit in units {
        unit.output = Some(service_unavailable(unit.index));
    }
}
