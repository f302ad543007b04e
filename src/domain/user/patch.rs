//! Partial update of a user record.

use crate::domain::foundation::{BirthDate, Email};

/// Field overrides for a partial update.
///
/// `None` means "leave unchanged". There is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<BirthDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}
