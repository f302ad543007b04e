//! Storage Adapters
//!
//! In-process implementation of the UserRepository port.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryUserRepository;
//!
//! // Development and tests: no database required
//! let repository = Arc::new(InMemoryUserRepository::new());
//! ```

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
