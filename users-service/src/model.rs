//! User entity exposed through the GraphQL schema

use async_graphql::{SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// A directory entry
///
/// `id` is assigned by the store from a monotonically increasing counter and
/// is never reused, so a delete followed by a create cannot produce a
/// duplicate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct User {
    /// Store-assigned identifier, unique for the lifetime of the process
    pub id: ID,

    /// Display name
    pub username: String,

    /// Contact address (no format validation beyond non-null typing)
    pub email: String,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ID(id.to_string()),
            username: username.into(),
            email: email.into(),
        }
    }
}
