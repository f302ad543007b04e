//! DeleteUser - Command handler for removing a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserRepository;

/// Command to delete a user.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

/// Handler for deleting users.
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand) -> Result<(), DomainError> {
        // Deleting an already-deleted id must fail
        if !self.repository.exists(&cmd.user_id).await? {
            return Err(DomainError::user_not_found(cmd.user_id));
        }

        self.repository.delete(&cmd.user_id).await?;
        tracing::info!(user_id = %cmd.user_id, "User deleted");

        Ok(())
    }
}
