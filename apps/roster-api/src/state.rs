//! Application state management

use domain_users::{InMemoryUserStore, UserService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub service: UserService<InMemoryUserStore>,
}
