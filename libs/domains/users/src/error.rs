use std::collections::BTreeMap;

use axum::response::{IntoResponse, Response};
use axum_helpers::errors::Problem;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(u64),

    /// One entry per violated field; every violation is collected before
    /// the error is raised.
    #[error("request validation failed")]
    Validation(BTreeMap<String, String>),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(id) => {
                tracing::info!(user_id = id, "User lookup missed");
                Problem::not_found(format!("User {} not found", id)).into_response()
            }
            UserError::Validation(errors) => {
                tracing::info!(?errors, "Rejected invalid user payload");
                Problem::validation("Request validation errors", errors).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn not_found_renders_a_404_problem() {
        let response = UserError::NotFound(99).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["title"], "Resource not found");
        assert_eq!(json["detail"], "User 99 not found");
    }

    #[tokio::test]
    async fn validation_renders_a_400_problem_with_field_errors() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), "must not be blank".to_string());
        errors.insert("name".to_string(), "must not be blank".to_string());

        let response = UserError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["title"], "Validation failed");
        assert_eq!(json["errors"]["name"], "must not be blank");
        assert_eq!(json["errors"]["email"], "must not be blank");
    }
}
