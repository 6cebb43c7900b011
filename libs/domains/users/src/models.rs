use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted name length, in characters, after trimming
pub const NAME_MAX_LEN: usize = 50;

/// Maximum accepted email length, in characters, after normalization
pub const EMAIL_MAX_LEN: usize = 100;

/// A stored user record.
///
/// Records only exist in normalized form: the store applies the same
/// canonicalization as [`CreateUser::normalized`] before persisting, so a
/// record and the input that produced it differ only by the presence of
/// `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, allocated by the store, never reused
    pub id: u64,
    /// Display name, trimmed
    pub name: String,
    /// Email address, trimmed and lowercased
    pub email: String,
}

/// DTO for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl CreateUser {
    /// Canonicalize the input: trim the name, trim and lowercase the
    /// email. Idempotent.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
        }
    }
}
