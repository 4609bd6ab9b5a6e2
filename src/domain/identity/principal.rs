//! The signed-in principal handle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IdentityId, Timestamp};

/// A signed-in principal as reported by the identity provider.
///
/// The flow core treats this as an opaque handle: it reads the id to key
/// storage lookups and never mutates or destroys it. Email is optional
/// because phone-authenticated accounts have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier issued by the provider.
    pub id: IdentityId,

    /// Email address, when the account has one.
    pub email: Option<String>,

    /// Display name, when the provider supplies one.
    pub display_name: Option<String>,

    /// Whether the provider has verified the email address.
    pub email_verified: bool,

    /// When the account was created at the provider.
    pub created_at: Timestamp,
}

impl Identity {
    /// Creates a new identity handle.
    pub fn new(
        id: IdentityId,
        email: Option<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email,
            display_name,
            email_verified,
            created_at: Timestamp::now(),
        }
    }

    /// Human-readable label: display name, then email, then the raw id.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: Option<&str>, name: Option<&str>) -> Identity {
        Identity::new(
            IdentityId::new("u1").unwrap(),
            email.map(String::from),
            name.map(String::from),
            true,
        )
    }

    #[test]
    fn label_prefers_display_name() {
        let id = identity(Some("a@example.com"), Some("Alice"));
        assert_eq!(id.label(), "Alice");
    }

    #[test]
    fn label_falls_back_to_email() {
        let id = identity(Some("a@example.com"), None);
        assert_eq!(id.label(), "a@example.com");
    }

    #[test]
    fn label_falls_back_to_id_for_phone_accounts() {
        let id = identity(None, None);
        assert_eq!(id.label(), "u1");
    }
}
