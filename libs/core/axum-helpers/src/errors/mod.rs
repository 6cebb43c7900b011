//! Problem-detail error payloads.
//!
//! Every error response in the workspace is rendered as an RFC 9457
//! problem document, so clients can dispatch on the `type` URI and read a
//! human-oriented `title`/`detail` pair. Validation problems additionally
//! carry an `errors` object mapping each violated field to its reason.

pub mod handlers;

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Problem `type` URIs recognized by clients.
pub mod problems {
    pub const NOT_FOUND: &str = "https://example.com/problems/not-found";
    pub const VALIDATION: &str = "https://example.com/problems/validation-error";
    pub const INTERNAL: &str = "https://example.com/problems/internal-error";
    /// For statuses whose semantics the status code already conveys
    pub const ABOUT_BLANK: &str = "about:blank";
}

/// Media type for problem documents
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// An RFC 9457 problem document.
///
/// # JSON Example
///
/// ```json
/// {
///   "type": "https://example.com/problems/validation-error",
///   "title": "Validation failed",
///   "status": 400,
///   "detail": "Request validation errors",
///   "errors": { "email": "must be a well-formed email address" }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    /// URI identifying the problem class
    #[serde(rename = "type")]
    pub kind: String,
    /// Short, human-readable summary of the problem class
    pub title: String,
    /// HTTP status code, duplicated in the body
    pub status: u16,
    /// Occurrence-specific explanation
    pub detail: String,
    /// Field-level violations; present on validation problems only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl Problem {
    pub fn new(
        status: StatusCode,
        kind: &str,
        title: &str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            errors: None,
        }
    }

    /// 404 problem for a missing resource.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            problems::NOT_FOUND,
            "Resource not found",
            detail,
        )
    }

    /// 400 problem carrying one reason per violated field.
    pub fn validation(detail: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        let mut problem = Self::new(
            StatusCode::BAD_REQUEST,
            problems::VALIDATION,
            "Validation failed",
            detail,
        );
        problem.errors = Some(errors);
        problem
    }

    /// 500 problem; the detail should stay generic, internals belong in logs.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            problems::INTERNAL,
            "Internal server error",
            detail,
        )
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(self),
        )
            .into_response()
    }
}
