//! Tests for structural validation of the response model

use crate::catalog::{ErrorCatalog, codes};
use crate::response::{self, ErrorDetail, Response, Status};
use crate::validation::{StructuralValidate, Violation};

struct Payload {
    name: String,
}

impl StructuralValidate for Payload {
    fn validate(&self) -> Vec<Violation> {
        if self.name.is_empty() {
            vec![Violation::new("name", "must not be empty")]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn builder_outputs_always_pass_output_validation() {
    let catalog = ErrorCatalog::builtin();

    let ok = response::ok_response(
        5,
        Payload {
            name: "fine".to_string(),
        },
    );
    assert!(ok.validate().is_empty());

    let bad: Response<Payload> =
        response::bad_request(&catalog, 0, &[codes::EMPTY_REQUEST_NOT_ALLOWED]);
    assert!(bad.validate().is_empty());

    let aborted: Response<Payload> = response::server_aborted(&catalog, 1);
    assert!(aborted.validate().is_empty());

    let unavailable: Response<Payload> = response::service_unavailable(2);
    assert!(unavailable.validate().is_empty());
}

#[test]
fn success_response_with_errors_is_invalid() {
    let response = Response {
        index: 0,
        status: Status::Ok,
        errors: vec![ErrorDetail {
            code: -1,
            error: "should not be here".to_string(),
        }],
        ok: Some(Payload {
            name: "x".to_string(),
        }),
    };

    let violations = response.validate();
    assert!(violations.iter().any(|v| v.field == "errors"));
}

#[test]
fn error_response_without_errors_is_invalid() {
    let response: Response<Payload> = Response {
        index: 0,
        status: Status::BadRequest,
        errors: vec![],
        ok: None,
    };

    assert!(!response.validate().is_empty());
}

#[test]
fn error_response_with_payload_is_invalid() {
    let response = Response {
        index: 0,
        status: Status::InternalError,
        errors: vec![ErrorDetail {
            code: -1,
            error: "boom".to_string(),
        }],
        ok: Some(Payload {
            name: "leak".to_string(),
        }),
    };

    let violations = response.validate();
    assert!(violations.iter().any(|v| v.field == "ok"));
}

#[test]
fn malformed_error_detail_is_reported_with_path() {
    let response: Response<Payload> = Response {
        index: 0,
        status: Status::BadRequest,
        errors: vec![ErrorDetail {
            code: 0,
            error: String::new(),
        }],
        ok: None,
    };

    let violations = response.validate();
    assert!(violations.iter().any(|v| v.field == "errors[0].code"));
    assert!(violations.iter().any(|v| v.field == "errors[0].error"));
}

#[test]
fn invalid_payload_is_reported_under_ok_path() {
    let response = response::ok_response(
        0,
        Payload {
            name: String::new(),
        },
    );

    let violations = response.validate();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "ok.name");
}

#[test]
fn violation_render_includes_field_path() {
    assert_eq!(
        Violation::new("name", "must not be empty").render(),
        "name: must not be empty"
    );
    assert_eq!(Violation::new("", "whole value bad").render(), "whole value bad");
}
