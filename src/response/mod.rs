//! Response model
//!
//! Entity definitions for the wire-stable per-item response shape plus the
//! builder functions that construct well-formed responses from a code,
//! status, or payload.

mod builders;
mod types;

pub use builders::{
    bad_request, client_aborted, error_response, fail_all, fail_all_client_aborted,
    fail_all_internal_error, fail_all_not_found, fail_all_server_aborted,
    fail_all_service_unavailable, internal_error, not_found, ok_response, server_aborted,
    service_unavailable,
};
pub use types::{ErrorDetail, Response, Responses, Status};
