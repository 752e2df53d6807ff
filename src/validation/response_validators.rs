//! Structural rules for the response model
//!
//! These rules are what the output-validation stage runs against every
//! handler-produced response: status, errors and ok must be mutually
//! consistent with the outcome-status semantics, and error details must be
//! reportable (non-zero code, non-empty message).

use crate::response::{ErrorDetail, Response, Status};

use super::trait_def::{StructuralValidate, Violation};

impl StructuralValidate for ErrorDetail {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.code == 0 {
            violations.push(Violation::new("code", "error code is required"));
        }
        if self.error.is_empty() {
            violations.push(Violation::new("error", "error message is required"));
        }
        violations
    }
}

impl<T: StructuralValidate> StructuralValidate for Response<T> {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (i, detail) in self.errors.iter().enumerate() {
            for violation in detail.validate() {
                violations.push(Violation::new(
                    format!("errors[{i}].{}", violation.field),
                    violation.message,
                ));
            }
        }

        match self.status {
            Status::Ok => {
                if !self.errors.is_empty() {
                    violations.push(Violation::new(
                        "errors",
                        "success response must not carry errors",
                    ));
                }
            }
            Status::BadRequest | Status::NotFound | Status::InternalError => {
                if self.errors.is_empty() {
                    violations.push(Violation::new(
                        "errors",
                        "error response requires at least one error",
                    ));
                }
                if self.ok.is_some() {
                    violations.push(Violation::new(
                        "ok",
                        "error response must not carry a payload",
                    ));
                }
            }
            // Service-unavailable is the body-less pass-through case: both
            // errors and ok may be empty.
            Status::ServiceUnavailable => {
                if self.ok.is_some() {
                    violations.push(Violation::new(
                        "ok",
                        "service-unavailable response must not carry a payload",
                    ));
                }
            }
        }

        if let Some(payload) = &self.ok {
            for violation in payload.validate() {
                violations.push(Violation::new(
                    format!("ok.{}", violation.field),
                    violation.message,
                ));
            }
        }

        violations
    }
}
