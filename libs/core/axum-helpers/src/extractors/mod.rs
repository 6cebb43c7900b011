//! Custom extractors for Axum handlers.
//!
//! These standardize rejection responses so adapter edges never leak
//! axum's default plain-text errors.

pub mod positive_id;

pub use positive_id::PositiveId;
