//! HTTP handlers for the Users API

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{PositiveId, errors::Problem};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, User};
use crate::service::UserService;
use crate::store::UserStore;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user),
    components(schemas(User, CreateUser, Problem)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<S: UserStore + 'static>(service: UserService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// List all users
///
/// GET /users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users, ascending by id", body = Vec<User>)
    )
)]
async fn list_users<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User,
            headers(("Location" = String, description = "Canonical path of the created user"))),
        (status = 400, description = "Validation failed", body = Problem)
    )
)]
async fn create_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;

    let location = format!("/api/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    ))
}

/// Get a user by id
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User id, positive")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Id is not a positive integer", body = Problem),
        (status = 404, description = "No user with this id", body = Problem)
    )
)]
async fn get_user<S: UserStore>(
    State(service): State<Arc<UserService<S>>>,
    PositiveId(id): PositiveId,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use axum::response::Response;
    use tower::ServiceExt;

    fn app() -> Router {
        router(UserService::new(InMemoryUserStore::new()))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_on_an_empty_store_is_an_empty_array() {
        let response = app().oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn create_returns_201_with_location_and_normalized_body() {
        let response = app()
            .oneshot(post_request(
                "/",
                r#"{"name":" Charlie ","email":" CHARLIE@EXAMPLE.COM "}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/users/1"
        );

        let json = body_json(response).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Charlie");
        assert_eq!(json["email"], "charlie@example.com");
    }

    #[tokio::test]
    async fn create_with_invalid_payload_lists_every_violated_field() {
        let response = app()
            .oneshot(post_request("/", r#"{"name":"","email":"not-an-email"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["title"], "Validation failed");
        assert!(json["errors"]["name"].is_string());
        assert!(json["errors"]["email"].is_string());
    }

    #[tokio::test]
    async fn get_missing_user_is_a_404_problem() {
        let response = app().oneshot(get_request("/99")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["title"], "Resource not found");
        assert_eq!(json["detail"], "User 99 not found");
    }

    #[tokio::test]
    async fn get_with_non_positive_id_is_rejected() {
        for uri in ["/0", "/abc"] {
            let response = app().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
        }
    }

    #[tokio::test]
    async fn created_users_are_listed_in_id_order() {
        let app = app();

        for (name, email) in [
            ("Alice", "alice@example.com"),
            ("Bob", "bob@example.com"),
        ] {
            let body = format!(r#"{{"name":"{}","email":"{}"}}"#, name, email);
            let response = app.clone().oneshot(post_request("/", &body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_request("/")).await.unwrap();
        let json = body_json(response).await;

        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["name"], "Alice");
        assert_eq!(json[1]["id"], 2);
        assert_eq!(json[1]["email"], "bob@example.com");
    }

    #[tokio::test]
    async fn created_user_is_fetchable_at_its_location() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_request(
                "/",
                r#"{"name":"Alice","email":"alice@example.com"}"#,
            ))
            .await
            .unwrap();
        let created = body_json(response).await;

        let response = app.oneshot(get_request("/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }
}
