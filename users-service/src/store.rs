//! In-memory user store shared across resolvers
//!
//! The whole read-then-mutate sequence for every operation runs under a
//! single lock guard, so id allocation and the list mutation are atomic with
//! respect to concurrent requests.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::User;

struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

/// Process-local user collection
///
/// Cloning is cheap; all clones share the same underlying list. Insertion
/// order is preserved, which is the order `list` returns.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl UserStore {
    /// Create an empty store with the id counter at 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-populated with the two fixture users
    ///
    /// The counter starts past the seeded ids, so the first created user
    /// gets id "3".
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                users: vec![
                    User::new(1, "john_doe", "john@example.com"),
                    User::new(2, "jane_doe", "jane@example.com"),
                ],
                next_id: 3,
            })),
        }
    }

    /// Snapshot of all users in insertion order
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Look up a user by id
    pub async fn get(&self, id: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
    }

    /// Append a new user and return it
    ///
    /// The id comes from the store counter, which only ever moves forward.
    pub async fn create(&self, username: String, email: String) -> User {
        let mut inner = self.inner.write().await;
        let user = User::new(inner.next_id, username, email);
        inner.next_id += 1;
        inner.users.push(user.clone());
        user
    }

    /// Remove the user with the given id, returning it
    ///
    /// Returns `None` if no user matches; the list is left untouched.
    pub async fn remove(&self, id: &str) -> Option<User> {
        let mut inner = self.inner.write().await;
        let pos = inner.users.iter().position(|u| u.id.as_str() == id)?;
        Some(inner.users.remove(pos))
    }

    /// Number of users currently in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether the store holds no users
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
