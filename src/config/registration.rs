//! Registration rules

use serde::Deserialize;

use super::error::ValidationError;

/// Oldest minimum age accepted by validation.
const MAX_MIN_AGE: u32 = 150;

/// Registration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Applicants must be strictly older than this many years
    #[serde(default = "default_min_age")]
    pub min_age: u32,
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_age > MAX_MIN_AGE {
            return Err(ValidationError::MinAgeTooLarge);
        }
        Ok(())
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
        }
    }
}

fn default_min_age() -> u32 {
    18
}
