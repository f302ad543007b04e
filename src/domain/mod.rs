//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, dates, email, errors)
//! - `user` - The person record and its partial-update value

pub mod foundation;
pub mod user;
