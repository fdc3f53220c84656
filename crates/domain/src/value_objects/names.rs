//! Validated name newtype for creatures
//!
//! Names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a creature name
const MAX_NAME_LENGTH: usize = 200;

/// A validated creature name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CreatureName(String);

impl CreatureName {
    /// Create a new validated creature name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Creature name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Creature name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CreatureName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CreatureName> for String {
    fn from(name: CreatureName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name() {
        let name = CreatureName::new("Smolder").unwrap();
        assert_eq!(name.as_str(), "Smolder");
        assert_eq!(name.to_string(), "Smolder");
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = CreatureName::new("  Gruk  ").unwrap();
        assert_eq!(name.as_str(), "Gruk");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(CreatureName::new("").is_err());
        assert!(CreatureName::new("   ").is_err());
        assert!(CreatureName::new("\t\n").is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(CreatureName::new(long).is_err());
        let at_limit = "x".repeat(MAX_NAME_LENGTH);
        assert!(CreatureName::new(at_limit).is_ok());
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let name: CreatureName = serde_json::from_str("\"Elowen\"").unwrap();
        assert_eq!(name.as_str(), "Elowen");
        assert!(serde_json::from_str::<CreatureName>("\"   \"").is_err());
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Elowen\"");
    }
}
