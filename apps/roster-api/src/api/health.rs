//! Readiness endpoint

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    service: String,
    version: String,
    users: usize,
}

async fn ready(state: AppState) -> Json<ReadyResponse> {
    // The store is memory-resident, so readiness only reports its size
    let users = state
        .service
        .list_users()
        .await
        .map(|u| u.len())
        .unwrap_or(0);

    Json(ReadyResponse {
        status: "ready".to_string(),
        service: state.config.app.name.to_string(),
        version: state.config.app.version.to_string(),
        users,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}
