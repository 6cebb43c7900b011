use std::collections::BTreeMap;
use std::sync::Arc;

use validator::ValidateEmail;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, EMAIL_MAX_LEN, NAME_MAX_LEN, User};
use crate::store::UserStore;

/// Service layer for user business logic.
///
/// Thin failure-typing layer over the store: this is the one place where
/// an absent record becomes a typed `NotFound` and where creation input
/// is validated.
pub struct UserService<S: UserStore> {
    store: Arc<S>,
}

// Manual impl: cloning shares the store, the store itself need not be Clone
impl<S: UserStore> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// List all users, ascending by id.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        Ok(self.store.find_all().await)
    }

    /// Get a user by id.
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        self.store
            .find_by_id(id)
            .await
            .ok_or(UserError::NotFound(id))
    }

    /// Normalize and validate the input, then create the user.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let input = input.normalized();
        self.validate_create(&input)?;

        Ok(self.store.create(input).await)
    }

    // Validation helpers
    //
    // Each field is checked independently and every violation is reported
    // in one error, keyed by field name.

    fn validate_create(&self, input: &CreateUser) -> UserResult<()> {
        let mut errors = BTreeMap::new();

        if let Err(reason) = validate_name(&input.name) {
            errors.insert("name".to_string(), reason.to_string());
        }
        if let Err(reason) = validate_email(&input.email) {
            errors.insert("email".to_string(), reason.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(UserError::Validation(errors))
        }
    }
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("must not be blank");
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err("must be at most 50 characters");
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("must not be blank");
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err("must be at most 100 characters");
    }
    if !is_email_shaped(email) {
        return Err("must be a well-formed email address");
    }

    Ok(())
}

// The validator crate implements the HTML5 email grammar; on top of that
// the domain must contain at least one dot.
fn is_email_shaped(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}
