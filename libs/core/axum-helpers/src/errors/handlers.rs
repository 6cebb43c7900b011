use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{Problem, problems};

/// Fallback handler for routes that match nothing.
pub async fn not_found() -> Response {
    Problem::not_found("The requested resource was not found").into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    Problem::new(
        StatusCode::METHOD_NOT_ALLOWED,
        problems::ABOUT_BLANK,
        "Method not allowed",
        "The HTTP method is not allowed for this resource",
    )
    .into_response()
}
