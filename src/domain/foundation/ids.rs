//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Unique identifier of a signed-in principal, as issued by the identity
/// provider.
///
/// The flow core never generates these; it only uses them to namespace
/// flag store keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    /// Creates a new IdentityId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("identity_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a questionnaire question (e.g. `goals`, `activity`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new QuestionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_id_accepts_non_empty() {
        let id = IdentityId::new("u1").unwrap();
        assert_eq!(id.as_str(), "u1");
        assert_eq!(id.to_string(), "u1");
    }

    #[test]
    fn identity_id_rejects_empty() {
        assert!(IdentityId::new("").is_err());
    }

    #[test]
    fn question_id_accepts_non_empty() {
        let id = QuestionId::new("goals").unwrap();
        assert_eq!(id.as_str(), "goals");
    }

    #[test]
    fn question_id_rejects_empty() {
        assert!(QuestionId::new(String::new()).is_err());
    }

    #[test]
    fn identity_id_serializes_transparently() {
        let id = IdentityId::new("user-123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-123\"");
    }

    #[test]
    fn question_id_deserializes_transparently() {
        let id: QuestionId = serde_json::from_str("\"activity\"").unwrap();
        assert_eq!(id.as_str(), "activity");
    }
}
