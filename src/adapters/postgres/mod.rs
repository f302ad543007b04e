//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - User record persistence

mod user_repository;

pub use user_repository::PostgresUserRepository;
