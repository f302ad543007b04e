//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the users domain.

mod birth_date;
mod email;
mod errors;
mod ids;

pub use birth_date::BirthDate;
pub use email::Email;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
