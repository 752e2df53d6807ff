//! Built-in error codes
//!
//! Negative code values are reserved for the crate; consumers register their
//! own codes in the positive range.

use super::ErrorCode;

/// The pipeline itself failed, or a handler produced a malformed response.
pub const INTERNAL_SERVER_ERROR: ErrorCode = -1;

/// An empty batch was submitted to an endpoint that does not permit one.
pub const EMPTY_REQUEST_NOT_ALLOWED: ErrorCode = -2;

/// The batch contained more items than the configured admission limit.
pub const MAX_REQUESTS_EXCEEDED: ErrorCode = -3;

/// The item itself was fine but a sibling item failed, so the whole batch
/// was aborted.
pub const OPERATION_ABORTED: ErrorCode = -4;

/// The item failed structural validation.
pub const INPUT_VALIDATION_FAILED: ErrorCode = -5;
