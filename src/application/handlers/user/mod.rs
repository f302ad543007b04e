//! User application handlers.
//!
//! Command and query handlers for user record management.

mod create_user;
mod delete_user;
mod patch_user;
mod search_users;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use patch_user::{PatchUserCommand, PatchUserHandler};
pub use search_users::{SearchUsersHandler, SearchUsersQuery};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
