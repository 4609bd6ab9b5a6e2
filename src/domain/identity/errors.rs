//! Authentication error taxonomy.
//!
//! Domain-centric errors: they describe what went wrong from the app's
//! perspective, not the provider's. Per the flow design, an auth error is
//! surfaced to the user as a blocking notification and never moves the
//! flow controller off the auth screen by itself.

use thiserror::Error;

/// Errors reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password or verification code did not match an account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Sign-up attempted with an email that already has an account.
    #[error("An account with this email already exists")]
    EmailAlreadyInUse,

    /// No account exists for the given email.
    #[error("No account found for this email")]
    UserNotFound,

    /// Password rejected by the provider's strength policy.
    #[error("Password is too weak")]
    WeakPassword,

    /// The provider rejected the request (e.g. a revoked social token).
    #[error("Provider rejected the request: {0}")]
    ProviderRejected(String),

    /// Network failure reaching the provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider is unreachable or misconfigured.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Creates a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Network(_) | AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_displays_user_facing_message() {
        assert_eq!(format!("{}", AuthError::InvalidCredentials), "Invalid credentials");
    }

    #[test]
    fn service_unavailable_includes_detail() {
        let err = AuthError::service_unavailable("connection refused");
        assert_eq!(
            format!("{}", err),
            "Auth service unavailable: connection refused"
        );
    }

    #[test]
    fn transient_errors_are_network_and_unavailable() {
        assert!(AuthError::network("timeout").is_transient());
        assert!(AuthError::service_unavailable("down").is_transient());
        assert!(!AuthError::InvalidCredentials.is_transient());
        assert!(!AuthError::EmailAlreadyInUse.is_transient());
    }
}
