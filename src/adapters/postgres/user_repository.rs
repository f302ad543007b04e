//! PostgreSQL implementation of UserRepository.
//!
//! Persists user records to the `users` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    BirthDate, DomainError, Email, ErrorCode, UserId, ValidationError,
};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, birth_date, address, phone_number";

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(row_to_user).transpose()
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check user existence", e))?;

        Ok(result.0)
    }

    async fn insert(&self, user: &NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (email, first_name, last_name, birth_date, address, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.email.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birth_date.as_naive())
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert user", e))?;

        row_to_user(row)
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (id, email, first_name, last_name, birth_date, address, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                birth_date = EXCLUDED.birth_date,
                address = EXCLUDED.address,
                phone_number = EXCLUDED.phone_number
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.id().as_i64())
        .bind(user.email().as_str())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.birth_date().as_naive())
        .bind(user.address())
        .bind(user.phone_number())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save user", e))?;

        row_to_user(row)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }

    async fn find_by_birth_date_between(
        &self,
        from: BirthDate,
        to: BirthDate,
    ) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users WHERE birth_date BETWEEN $1 AND $2 ORDER BY id",
            USER_COLUMNS
        ))
        .bind(from.as_naive())
        .bind(to.as_naive())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to search users by birth date", e))?;

        rows.into_iter().map(row_to_user).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i64 = column(&row, "id")?;
    let email: String = column(&row, "email")?;
    let first_name: String = column(&row, "first_name")?;
    let last_name: String = column(&row, "last_name")?;
    let birth_date: NaiveDate = column(&row, "birth_date")?;
    let address: Option<String> = column(&row, "address")?;
    let phone_number: Option<String> = column(&row, "phone_number")?;

    let corrupt = |e: ValidationError| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Stored user {} is invalid: {}", id, e),
        )
    };

    let email = Email::new(email).map_err(corrupt)?;
    let contents = NewUser::new(
        email,
        first_name,
        last_name,
        BirthDate::from_naive(birth_date),
        address,
        phone_number,
    )
    .map_err(corrupt)?;

    Ok(User::from_new(UserId::new(id), contents))
}
