//! User module - the person record managed by the service.
//!
//! # Domain Invariants
//!
//! 1. The identifier is assigned by the store and never changes
//! 2. Email, first name, last name and birth date are always present
//! 3. Address and phone number are optional free text

mod patch;
mod record;

pub use patch::UserPatch;
pub use record::{NewUser, User};
