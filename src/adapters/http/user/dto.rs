//! HTTP DTOs for user endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Field names on the wire are camelCase and birth dates travel as `dd/MM/yyyy` text.

use serde::{Deserialize, Serialize};

use crate::application::handlers::user::{
    CreateUserCommand, PatchUserCommand, SearchUsersQuery, UpdateUserCommand,
};
use crate::domain::foundation::{Email, UserId, ValidationError};
use crate::domain::user::User;

/// One `"<field> <message>"` entry per failing request field.
pub type FieldErrors = Vec<String>;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a user, also used as the full-replace payload.
///
/// Required fields are optional on the wire so that missing, `null` and blank
/// values all reach validation and are reported per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Syntactically valid create/replace payload.
struct ValidUserPayload {
    email: Email,
    first_name: String,
    last_name: String,
    birth_date: String,
    address: Option<String>,
    phone_number: Option<String>,
}

impl CreateUserRequest {
    fn validate(self) -> Result<ValidUserPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = match Email::new(self.email.unwrap_or_default()) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(field_error("email", &e));
                None
            }
        };
        let first_name = self.first_name.unwrap_or_default();
        let last_name = self.last_name.unwrap_or_default();
        let birth_date = self.birth_date.unwrap_or_default();
        require_non_blank("firstName", &first_name, &mut errors);
        require_non_blank("lastName", &last_name, &mut errors);
        require_non_blank("birthDate", &birth_date, &mut errors);

        match email {
            Some(email) if errors.is_empty() => Ok(ValidUserPayload {
                email,
                first_name,
                last_name,
                birth_date,
                address: self.address,
                phone_number: self.phone_number,
            }),
            _ => Err(errors),
        }
    }

    /// Validates the payload and turns it into a create command.
    pub fn into_create_command(self) -> Result<CreateUserCommand, FieldErrors> {
        let valid = self.validate()?;
        Ok(CreateUserCommand {
            email: valid.email,
            first_name: valid.first_name,
            last_name: valid.last_name,
            birth_date: valid.birth_date,
            address: valid.address,
            phone_number: valid.phone_number,
        })
    }

    /// Validates the payload and turns it into a full-replace command for `user_id`.
    pub fn into_update_command(self, user_id: UserId) -> Result<UpdateUserCommand, FieldErrors> {
        let valid = self.validate()?;
        Ok(UpdateUserCommand {
            user_id,
            email: valid.email,
            first_name: valid.first_name,
            last_name: valid.last_name,
            birth_date: valid.birth_date,
            address: valid.address,
            phone_number: valid.phone_number,
        })
    }
}

/// Request to change some fields of a user. Absent or null fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl PatchUserRequest {
    /// Validates present fields and turns the request into a patch command.
    pub fn into_command(self, user_id: UserId) -> Result<PatchUserCommand, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = match self.email.map(Email::new).transpose() {
            Ok(email) => email,
            Err(e) => {
                errors.push(field_error("email", &e));
                None
            }
        };
        if let Some(first_name) = &self.first_name {
            require_non_blank("firstName", first_name, &mut errors);
        }
        if let Some(last_name) = &self.last_name {
            require_non_blank("lastName", last_name, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PatchUserCommand {
            user_id,
            email,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            address: self.address,
            phone_number: self.phone_number,
        })
    }
}

/// Query parameters for the birth-date range search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersParams {
    pub from_date: String,
    pub to_date: String,
}

impl From<SearchUsersParams> for SearchUsersQuery {
    fn from(params: SearchUsersParams) -> Self {
        Self {
            from_date: params.from_date,
            to_date: params.to_date,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Envelope for every successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Wire representation of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_i64(),
            email: user.email().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            birth_date: user.birth_date().format(),
            address: user.address().map(str::to_string),
            phone_number: user.phone_number().map(str::to_string),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: "Request validation failed".to_string(),
            details: Some(serde_json::json!({ "errors": errors })),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn require_non_blank(field: &str, value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.push(format!("{} must not be blank", field));
    }
}

fn field_error(field: &str, error: &ValidationError) -> String {
    match error {
        ValidationError::EmptyField { .. } => format!("{} must not be blank", field),
        ValidationError::InvalidFormat { reason, .. } => format!("{} {}", field, reason),
    }
}
