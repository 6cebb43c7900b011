//! Positive-integer path parameter extractor with automatic validation.

use std::collections::BTreeMap;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::errors::Problem;

/// Extractor for numeric resource ids in the path.
///
/// Parses the `{id}` path segment as a `u64` and rejects zero or
/// non-numeric values with a 400 validation problem. Ids are allocated
/// from 1, so 0 can never name a resource.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PositiveId;
///
/// async fn get_user(PositiveId(id): PositiveId) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
pub struct PositiveId(pub u64);

impl<S> FromRequestParts<S> for PositiveId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<u64>() {
            Ok(id) if id > 0 => Ok(PositiveId(id)),
            _ => {
                let mut errors = BTreeMap::new();
                errors.insert("id".to_string(), "must be a positive integer".to_string());
                Err(Problem::validation("Constraint violation", errors).into_response())
            }
        }
    }
}
