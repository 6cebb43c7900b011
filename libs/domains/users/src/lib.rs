//! Users Domain
//!
//! User management: creation with normalization and validation, lookup by
//! id, and listing in id order, backed by a concurrency-safe in-memory
//! store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, typed failures
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Id allocation + record storage (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records, DTOs, normalization
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserStore, UserService};
//!
//! // Create the store once at startup; it lives for the process lifetime
//! let service = UserService::new(InMemoryUserStore::new());
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, User};
pub use service::UserService;
pub use store::{InMemoryUserStore, UserStore};
