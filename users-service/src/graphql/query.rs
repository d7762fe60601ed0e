//! Query resolvers

use async_graphql::{Context, Object, Result, ID};

use crate::model::User;
use crate::store::UserStore;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users, in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data_unchecked::<UserStore>();
        let users = store.list().await;
        tracing::debug!(count = users.len(), "listing users");
        Ok(users)
    }

    /// A single user by id; null when no user matches
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let store = ctx.data_unchecked::<UserStore>();
        Ok(store.get(id.as_str()).await)
    }
}
