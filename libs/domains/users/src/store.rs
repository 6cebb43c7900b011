use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::models::{CreateUser, User};

/// Storage seam for user records.
///
/// All operations are safe under arbitrary concurrent callers; a record
/// returned by `create` is immediately visible to `find_by_id` and
/// `find_all` from any task.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Allocate the next id, persist the normalized record, return it.
    async fn create(&self, input: CreateUser) -> User;

    /// Snapshot of all records, ascending by id. Unaffected by
    /// concurrent writes happening during or after the call.
    async fn find_all(&self) -> Vec<User>;

    /// Look up a single record by id.
    async fn find_by_id(&self, id: u64) -> Option<User>;
}

/// In-memory implementation of [`UserStore`].
///
/// Owns the id-to-record mapping and the id sequence exclusively; it is
/// created once at startup and shared behind an `Arc` for the process
/// lifetime. Nothing persists across restarts.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<u64, User>>,
    seq: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch-and-increment on the shared counter: every call observes a
    /// distinct, strictly greater value even under concurrent creates.
    /// The first allocated id is 1; 0 never names a record.
    fn next_id(&self) -> u64 {
        // Only atomicity matters here; visibility of the record itself is
        // sequenced by the map's write lock.
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, input: CreateUser) -> User {
        // Inputs are normalized again on the way in, so stored records
        // satisfy the canonicalization contract regardless of caller.
        let input = input.normalized();

        let user = User {
            id: self.next_id(),
            name: input.name,
            email: input.email,
        };

        self.users.write().await.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        user
    }

    async fn find_all(&self) -> Vec<User> {
        let users = self.users.read().await;

        // The map iterates in arbitrary order; listing order is by id.
        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by_key(|u| u.id);
        result
    }

    async fn find_by_id(&self, id: u64) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }
}
