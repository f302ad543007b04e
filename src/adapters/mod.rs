//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST endpoints
//! - `postgres` - PostgreSQL user store (sqlx)
//! - `storage` - In-memory user store for development and tests

pub mod http;
pub mod postgres;
pub mod storage;

pub use http::{api_router, app_router, UserHandlers};
pub use postgres::PostgresUserRepository;
pub use storage::InMemoryUserRepository;
