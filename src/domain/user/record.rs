//! User record and its unsaved counterpart.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BirthDate, Email, UserId, ValidationError};

use super::UserPatch;

/// The client-supplied contents of a user record, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: BirthDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl NewUser {
    /// Builds the contents of a record, rejecting blank names.
    pub fn new(
        email: Email,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: BirthDate,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email,
            first_name: required("first_name", first_name.into())?,
            last_name: required("last_name", last_name.into())?,
            birth_date,
            address,
            phone_number,
        })
    }
}

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: Email,
    first_name: String,
    last_name: String,
    birth_date: BirthDate,
    address: Option<String>,
    phone_number: Option<String>,
}

impl User {
    /// Attaches an identifier to record contents.
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            email: new.email,
            first_name: new.first_name,
            last_name: new.last_name,
            birth_date: new.birth_date,
            address: new.address,
            phone_number: new.phone_number,
        }
    }

    /// Returns a copy with every field present in `patch` overridden.
    ///
    /// The identifier never changes. Absent fields keep their current value.
    pub fn patched(&self, patch: UserPatch) -> Self {
        Self {
            id: self.id,
            email: patch.email.unwrap_or_else(|| self.email.clone()),
            first_name: patch.first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: patch.last_name.unwrap_or_else(|| self.last_name.clone()),
            birth_date: patch.birth_date.unwrap_or(self.birth_date),
            address: patch.address.or_else(|| self.address.clone()),
            phone_number: patch.phone_number.or_else(|| self.phone_number.clone()),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_user() -> NewUser {
        NewUser::new(
            Email::new("user@gmail.com").unwrap(),
            "Bob",
            "Jackson",
            BirthDate::parse("01/02/1990").unwrap(),
            Some("414 Union Ave, Brooklyn, NY 11211".to_string()),
            Some("(111) 111-1111".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn new_user_rejects_blank_names() {
        let err = NewUser::new(
            Email::new("user@gmail.com").unwrap(),
            " ",
            "Jackson",
            BirthDate::parse("01/02/1990").unwrap(),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("first_name"));
    }

    #[test]
    fn from_new_keeps_every_field() {
        let user = User::from_new(UserId::new(1), sample_new_user());
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.email().as_str(), "user@gmail.com");
        assert_eq!(user.first_name(), "Bob");
        assert_eq!(user.last_name(), "Jackson");
        assert_eq!(user.birth_date().to_string(), "01/02/1990");
        assert_eq!(user.address(), Some("414 Union Ave, Brooklyn, NY 11211"));
        assert_eq!(user.phone_number(), Some("(111) 111-1111"));
    }

    #[test]
    fn patch_with_only_last_name_leaves_rest_untouched() {
        let user = User::from_new(UserId::new(1), sample_new_user());
        let patch = UserPatch {
            last_name: Some("Moore".to_string()),
            ..Default::default()
        };

        let patched = user.patched(patch);

        assert_eq!(patched.last_name(), "Moore");
        assert_eq!(patched.id(), user.id());
        assert_eq!(patched.email(), user.email());
        assert_eq!(patched.first_name(), user.first_name());
        assert_eq!(patched.birth_date(), user.birth_date());
        assert_eq!(patched.address(), user.address());
        assert_eq!(patched.phone_number(), user.phone_number());
        // original value is untouched
        assert_eq!(user.last_name(), "Jackson");
    }

    #[test]
    fn empty_patch_is_identity() {
        let user = User::from_new(UserId::new(5), sample_new_user());
        assert_eq!(user.patched(UserPatch::default()), user);
    }

    #[test]
    fn patch_fills_absent_optional_fields() {
        let mut contents = sample_new_user();
        contents.address = None;
        let user = User::from_new(UserId::new(2), contents);

        let patched = user.patched(UserPatch {
            address: Some("4005 Dayrl Rd".to_string()),
            ..Default::default()
        });

        assert_eq!(patched.address(), Some("4005 Dayrl Rd"));
    }
}
