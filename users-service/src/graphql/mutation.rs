//! Mutation resolvers

use async_graphql::{Context, Error, Object, Result, ID};

use crate::model::User;
use crate::store::UserStore;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user and return it
    ///
    /// No uniqueness or format validation on `username`/`email`; the schema's
    /// non-null typing is the only constraint.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
    ) -> Result<User> {
        let store = ctx.data_unchecked::<UserStore>();
        let user = store.create(username, email).await;
        tracing::info!(id = %user.id.as_str(), username = %user.username, "user created");
        Ok(user)
    }

    /// Delete a user by id, returning the removed entry
    ///
    /// The only explicit application error in the service: a missing id
    /// surfaces to the client as a GraphQL error entry. The field itself is
    /// nullable, so the rest of the response survives the error.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let store = ctx.data_unchecked::<UserStore>();
        match store.remove(id.as_str()).await {
            Some(user) => {
                tracing::info!(id = %user.id.as_str(), "user deleted");
                Ok(Some(user))
            }
            None => {
                tracing::warn!(id = %id.as_str(), "delete requested for unknown user");
                Err(Error::new("User not found"))
            }
        }
    }
}
