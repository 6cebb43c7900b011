use axum::Router;
use domain_users::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(state.service.clone())
}
