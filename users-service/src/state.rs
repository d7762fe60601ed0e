//! Application state shared across handlers

use std::sync::Arc;

use crate::{
    config::Config,
    graphql::{build_schema, UsersSchema},
    store::UserStore,
};

/// Application state shared across handlers
///
/// Cloning is cheap; the config is behind an `Arc` and the schema and store
/// are internally shared.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: UserStore,
    schema: UsersSchema,
}

impl AppState {
    /// Create application state with a freshly seeded store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, UserStore::seeded())
    }

    /// Create application state around an existing store
    ///
    /// Tests use this to start from an empty or pre-arranged store.
    pub fn with_store(config: Config, store: UserStore) -> Self {
        if config.database.is_some() {
            tracing::warn!(
                "database configured but persistence is not wired in; \
                 resolvers operate on the in-memory store"
            );
        }

        let schema = build_schema(store.clone());
        Self {
            config: Arc::new(config),
            store,
            schema,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Get the GraphQL schema
    pub fn schema(&self) -> &UsersSchema {
        &self.schema
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
