//! In-Memory User Repository Adapter
//!
//! Stores user records in memory, keyed by id.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{BirthDate, DomainError, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, User>,
    last_id: i64,
    writes: usize,
}

/// In-memory storage for user records
///
/// Ids are assigned from a counter starting at 1 and are never reused.
/// Search results come back in id order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored users
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Get the number of inserts, saves and deletes applied to the store
    pub async fn write_count(&self) -> usize {
        self.inner.read().await.writes
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.inner.read().await.users.contains_key(id))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        inner.writes += 1;
        let stored = User::from_new(UserId::new(inner.last_id), user.clone());
        inner.users.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        inner.writes += 1;
        inner.last_id = inner.last_id.max(user.id().as_i64());
        inner.users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.users.remove(id).is_none() {
            return Err(DomainError::user_not_found(id));
        }
        inner.writes += 1;
        Ok(())
    }

    async fn find_by_birth_date_between(
        &self,
        from: BirthDate,
        to: BirthDate,
    ) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .filter(|u| u.birth_date() >= from && u.birth_date() <= to)
            .cloned()
            .collect())
    }
}
