//! UserRepository port for user record persistence.

use async_trait::async_trait;

use crate::domain::foundation::{BirthDate, DomainError, UserId};
use crate::domain::user::{NewUser, User};

/// Durable keyed storage for user records.
///
/// Implementations must give read-after-write consistency to a single caller.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Insert a new record; the store assigns the identifier
    async fn insert(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Insert or overwrite the record with `user.id()`, returning the stored row
    async fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user by ID; an unknown ID fails with `UserNotFound`
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// All users whose birth date lies in `[from, to]`
    async fn find_by_birth_date_between(
        &self,
        from: BirthDate,
        to: BirthDate,
    ) -> Result<Vec<User>, DomainError>;
}
