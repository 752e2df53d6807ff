//! Response entity definitions

use serde::{Deserialize, Serialize};

use crate::catalog::ErrorCode;

/// Outcome class of a single response, serialized as its HTTP-style integer
/// so the wire shape round-trips through any encoding. The consuming
/// transport layer owns the final numeric mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    /// The item was handled successfully.
    Ok,
    /// The item (or the batch shape) was rejected as a client error.
    BadRequest,
    /// Client-facing abort / not-found outcome.
    NotFound,
    /// Server-side defect or server-side batch abort.
    InternalError,
    /// The service could not process the batch at all; carries no body.
    ServiceUnavailable,
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        match status {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalError => 500,
            Status::ServiceUnavailable => 503,
        }
    }
}

impl TryFrom<u16> for Status {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, String> {
        match value {
            200 => Ok(Status::Ok),
            400 => Ok(Status::BadRequest),
            404 => Ok(Status::NotFound),
            500 => Ok(Status::InternalError),
            503 => Ok(Status::ServiceUnavailable),
            other => Err(format!("unknown response status: {other}")),
        }
    }
}

/// A single resolved error carried by a [`Response`].
///
/// The message is resolved through the error catalog at response
/// construction time, never stored pre-resolved, so catalog changes made
/// before construction are observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Catalog code identifying the failure category.
    pub code: ErrorCode,
    /// Human-readable message for the chosen locale.
    pub error: String,
}

/// Per-item response returned to the caller.
///
/// Exactly one response is emitted per input index. On success `errors` is
/// empty and `ok` is present; on failure `errors` is non-empty and `ok` is
/// absent. A service-unavailable response may carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Response<T> {
    /// Index of the originating request unit within the batch.
    pub index: usize,
    /// Outcome class.
    pub status: Status,
    /// Structured errors, empty on success.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    /// Success payload, absent on failure.
    #[serde(default)]
    pub ok: Option<T>,
}

impl<T> Response<T> {
    /// Whether this response carries a success outcome.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Whether `code` appears among this response's errors.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|detail| detail.code == code)
    }
}

/// An ordered collection of responses, one per input index.
///
/// Mirrors the decoded wire payload on the consuming side and provides
/// index-based lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responses<T>(pub Vec<Response<T>>);

impl<T> Responses<T> {
    /// Find the response for `index`, if any.
    pub fn find(&self, index: usize) -> Option<&Response<T>> {
        self.0.iter().find(|response| response.index == index)
    }

    /// Split the response for `index` into its outcome parts.
    ///
    /// # Panics
    /// Panics when no response carries `index`; the producing pipeline
    /// guarantees one response per input index, so a missing index means the
    /// caller is looking at the wrong batch.
    pub fn unpack(&self, index: usize) -> (Status, &[ErrorDetail], Option<&T>) {
        let response = match self.find(index) {
            Some(response) => response,
            None => panic!("no response with index {index} in batch of {}", self.0.len()),
        };
        (response.status, &response.errors, response.ok.as_ref())
    }
}

impl<T> From<Vec<Response<T>>> for Responses<T> {
    fn from(responses: Vec<Response<T>>) -> Self {
        Self(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_integer() {
        for status in [
            Status::Ok,
            Status::BadRequest,
            Status::NotFound,
            Status::InternalError,
            Status::ServiceUnavailable,
        ] {
            let wire = u16::from(status);
            assert_eq!(Status::try_from(wire), Ok(status));
        }
    }

    #[test]
    fn unknown_status_integer_is_rejected() {
        assert!(Status::try_from(418).is_err());
    }

    #[test]
    fn response_wire_shape_is_stable() {
        let response = Response {
            index: 1,
            status: Status::BadRequest,
            errors: vec![ErrorDetail {
                code: -5,
                error: "Input validation failed".to_string(),
            }],
            ok: None::<String>,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "index": 1,
                "status": 400,
                "errors": [{"code": -5, "error": "Input validation failed"}],
                "ok": null,
            })
        );
    }

    #[test]
    fn responses_unpack_finds_by_index_not_position() {
        let responses: Responses<String> = vec![
            Response {
                index: 1,
                status: Status::Ok,
                errors: vec![],
                ok: Some("second".to_string()),
            },
            Response {
                index: 0,
                status: Status::Ok,
                errors: vec![],
                ok: Some("first".to_string()),
            },
        ]
        .into();

        let (status, errors, ok) = responses.unpack(0);
        assert_eq!(status, Status::Ok);
        assert!(errors.is_empty());
        assert_eq!(ok.map(String::as_str), Some("first"));
    }

    #[test]
    #[should_panic(expected = "no response with index")]
    fn unpack_panics_on_missing_index() {
        let responses: Responses<String> = Responses(vec![]);
        responses.unpack(3);
    }
}
