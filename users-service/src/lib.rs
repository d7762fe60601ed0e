//! # users-service
//!
//! A GraphQL user-directory service backed by an in-memory store.
//!
//! The schema exposes one entity (`User`) with list/get queries and
//! create/delete mutations. State is process-local and discarded on restart;
//! there is no persistence, authentication, or pagination.
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone());
//!     let app = router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod ids;
pub mod model;
pub mod observability;
pub mod server;
pub mod state;
pub mod store;

/// Common imports for building on this crate
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::graphql::{build_schema, UsersSchema};
    pub use crate::handlers::router;
    pub use crate::model::User;
    pub use crate::observability::{init_tracing, shutdown_tracing};
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::UserStore;
}
