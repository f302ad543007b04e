//! PatchUser - Command handler for partial updates.

use std::sync::Arc;

use crate::domain::foundation::{BirthDate, DomainError, Email, UserId};
use crate::domain::user::{User, UserPatch};
use crate::ports::UserRepository;

/// Command to change some fields of a user.
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone)]
pub struct PatchUserCommand {
    pub user_id: UserId,
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl PatchUserCommand {
    /// A command that changes nothing on `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            first_name: None,
            last_name: None,
            birth_date: None,
            address: None,
            phone_number: None,
        }
    }
}

/// Handler for partial user updates.
///
/// Age eligibility is not re-checked.
pub struct PatchUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl PatchUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: PatchUserCommand) -> Result<User, DomainError> {
        let user = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(cmd.user_id))?;

        let birth_date = cmd
            .birth_date
            .as_deref()
            .map(BirthDate::parse)
            .transpose()?;

        let patch = UserPatch {
            email: cmd.email,
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            birth_date,
            address: cmd.address,
            phone_number: cmd.phone_number,
        };

        let saved = self.repository.save(&user.patched(patch)).await?;
        tracing::info!(user_id = %saved.id(), "User patched");

        Ok(saved)
    }
}
