//! CreateUser - Command handler for registering a user.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::foundation::{BirthDate, DomainError, Email};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

/// Command to register a new user.
///
/// Fields are already syntactically valid; the birth date is still text.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Handler for registering users.
///
/// Only users strictly older than `min_age` completed years are accepted.
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
    min_age: u32,
    fixed_today: Option<NaiveDate>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, min_age: u32) -> Self {
        Self {
            repository,
            min_age,
            fixed_today: None,
        }
    }

    /// Evaluates ages against `today` instead of the current UTC date.
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<User, DomainError> {
        let birth_date = BirthDate::parse(&cmd.birth_date)?;

        let today = self.fixed_today.unwrap_or_else(|| Utc::now().date_naive());
        let age = birth_date.age_on(today);
        if age <= self.min_age {
            tracing::debug!(age, min_age = self.min_age, "Registration rejected: under minimum age");
            return Err(DomainError::under_minimum_age(self.min_age));
        }

        let new_user = NewUser::new(
            cmd.email,
            cmd.first_name,
            cmd.last_name,
            birth_date,
            cmd.address,
            cmd.phone_number,
        )?;

        let user = self.repository.insert(&new_user).await?;
        tracing::info!(user_id = %user.id(), "User created");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryUserRepository;
    use crate::domain::foundation::ErrorCode;

    const MIN_AGE: u32 = 18;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn command(birth_date: &str) -> CreateUserCommand {
        CreateUserCommand {
            email: Email::new("user@gmail.com").unwrap(),
            first_name: "Bob".to_string(),
            last_name: "Jackson".to_string(),
            birth_date: birth_date.to_string(),
            address: Some("414 Union Ave, Brooklyn, NY 11211".to_string()),
            phone_number: Some("(111) 111-1111".to_string()),
        }
    }

    fn handler(repo: &Arc<InMemoryUserRepository>) -> CreateUserHandler {
        CreateUserHandler::new(repo.clone(), MIN_AGE).with_fixed_today(today())
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let user = handler(&repo).handle(command("01/02/1990")).await.unwrap();

        assert_eq!(user.email().as_str(), "user@gmail.com");
        assert_eq!(user.first_name(), "Bob");
        assert_eq!(user.last_name(), "Jackson");
        assert_eq!(user.birth_date().to_string(), "01/02/1990");
        assert_eq!(user.address(), Some("414 Union Ave, Brooklyn, NY 11211"));
        assert_eq!(user.phone_number(), Some("(111) 111-1111"));
        assert_eq!(repo.write_count().await, 1);
        assert!(repo.exists(&user.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_user_too_young() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let err = handler(&repo).handle(command("01/02/2020")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnderMinimumAge);
        assert!(err.message().contains("over 18 years old"));
        assert_eq!(repo.write_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_user_exactly_min_age_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());

        // turns 18 on the evaluation date
        let err = handler(&repo).handle(command("15/06/2006")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::UnderMinimumAge);
        assert_eq!(repo.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_user_birthday_not_reached_counts_lower_age() {
        let repo = Arc::new(InMemoryUserRepository::new());

        // 19 next week, still 18 today
        let err = handler(&repo).handle(command("22/06/2005")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnderMinimumAge);

        // turned 19 yesterday
        let user = handler(&repo).handle(command("14/06/2005")).await;
        assert!(user.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_malformed_birth_date() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let err = handler(&repo).handle(command("1990-02-01")).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDateFormat);
        assert_eq!(repo.write_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_user_uses_configured_threshold() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = CreateUserHandler::new(repo.clone(), 40).with_fixed_today(today());

        let err = handler.handle(command("01/02/1990")).await.unwrap_err();

        assert_eq!(err.message(), "The user must be over 40 years old");
    }
}
