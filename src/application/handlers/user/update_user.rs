//! UpdateUser - Command handler for full replacement of a user.

use std::sync::Arc;

use crate::domain::foundation::{BirthDate, DomainError, Email, UserId};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Command to overwrite every field of an existing user.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Handler for full user replacement.
///
/// The stored record is replaced wholesale, optional fields omitted from the
/// command are cleared. Age eligibility is not re-checked.
pub struct UpdateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<User, DomainError> {
        if !self.repository.exists(&cmd.user_id).await? {
            return Err(DomainError::user_not_found(cmd.user_id));
        }

        let contents = NewUser::new(
            cmd.email,
            cmd.first_name,
            cmd.last_name,
            BirthDate::parse(&cmd.birth_date)?,
            cmd.address,
            cmd.phone_number,
        )?;

        let saved = self
            .repository
            .save(&User::from_new(cmd.user_id, contents))
            .await?;
        tracing::info!(user_id = %saved.id(), "User replaced");

        Ok(saved)
    }
}
