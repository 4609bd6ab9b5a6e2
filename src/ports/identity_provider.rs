//! Identity provider port.
//!
//! The external identity collaborator (Firebase in the original product,
//! any OIDC backend in general). The flow controller consumes
//! `current_identity` and `subscribe`; the auth screen drives the rest.
//!
//! # Contract
//!
//! Implementations must:
//! - Report `Ok(None)` from `current_identity` when nobody is signed in
//! - Publish every sign-in/sign-out through the `subscribe` channel
//! - Map provider failures onto the domain [`AuthError`] taxonomy

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::identity::{AuthError, Credentials, Identity};

/// Port for the external identity collaborator.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the currently signed-in identity, if any.
    async fn current_identity(&self) -> Result<Option<Identity>, AuthError>;

    /// Signs in with the given credentials.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - credentials did not match
    /// * `AuthError::ProviderRejected` - e.g. a revoked social token
    /// * `AuthError::Network` / `ServiceUnavailable` - transient failures
    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError>;

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// * `AuthError::EmailAlreadyInUse` - account exists for this email
    /// * `AuthError::WeakPassword` - provider strength policy rejection
    async fn sign_up(&self, credentials: Credentials) -> Result<Identity, AuthError>;

    /// Signs the current identity out.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Sends a password reset email.
    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Dispatches a verification code to a phone number, returning the
    /// verification id to pair with the entered code.
    async fn request_verification_code(&self, phone_number: &str) -> Result<String, AuthError>;

    /// Subscribes to identity changes. The receiver observes every
    /// sign-in and sign-out; dropping it unsubscribes.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }
}
