//! GraphQL schema wiring
//!
//! The schema exposes one entity type (`User`), two query fields and two
//! mutation fields:
//!
//! ```graphql
//! type User { id: ID!, username: String!, email: String! }
//! type Query { users: [User!]!, user(id: ID!): User }
//! type Mutation {
//!     createUser(username: String!, email: String!): User!
//!     deleteUser(id: ID!): User
//! }
//! ```

pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, Schema};

use crate::store::UserStore;
use mutation::MutationRoot;
use query::QueryRoot;

/// The users-service GraphQL schema type
pub type UsersSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store installed as context data
pub fn build_schema(store: UserStore) -> UsersSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
