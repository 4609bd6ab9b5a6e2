//! Mock identity provider.
//!
//! Implements the `IdentityProvider` port against an in-memory account
//! map, for tests and development without a real auth backend. Sign-ins
//! and sign-outs are published through a watch channel so subscribers see
//! the same notifications a real provider would deliver.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockIdentityProvider::new()
//!     .with_account("alice@example.com", "hunter2x");
//!
//! let identity = provider
//!     .sign_in(Credentials::EmailPassword {
//!         email: "alice@example.com".to_string(),
//!         password: SecretString::new("hunter2x".to_string()),
//!     })
//!     .await?;
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::foundation::IdentityId;
use crate::domain::identity::{AuthError, Credentials, Identity, SocialProvider};
use crate::ports::IdentityProvider;

/// Verification code the mock accepts for phone sign-in.
pub const MOCK_VERIFICATION_CODE: &str = "123456";

#[derive(Debug, Clone)]
struct Account {
    identity: Identity,
    password: String,
}

/// In-memory identity provider for tests and development.
pub struct MockIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    social_tokens: RwLock<HashMap<String, Identity>>,
    pending_codes: RwLock<HashMap<String, String>>,
    current: watch::Sender<Option<Identity>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    /// Creates an empty provider with nobody signed in.
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            social_tokens: RwLock::new(HashMap::new()),
            pending_codes: RwLock::new(HashMap::new()),
            current,
            force_error: RwLock::new(None),
        }
    }

    /// Registers an email/password account.
    pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        let identity = Self::fresh_identity(Some(email.clone()));
        self.accounts.write().unwrap().insert(
            email,
            Account {
                identity,
                password: password.into(),
            },
        );
        self
    }

    /// Registers an account with a fixed identity id (for keyed-storage
    /// assertions in tests).
    pub fn with_account_id(
        self,
        id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let email = email.into();
        let identity = Identity::new(
            IdentityId::new(id).expect("test account ids are non-empty"),
            Some(email.clone()),
            None,
            true,
        );
        self.accounts.write().unwrap().insert(
            email,
            Account {
                identity,
                password: password.into(),
            },
        );
        self
    }

    /// Registers a social token that signs in as a fresh identity.
    pub fn with_social_token(self, token: impl Into<String>) -> Self {
        let identity = Self::fresh_identity(None);
        self.social_tokens
            .write()
            .unwrap()
            .insert(token.into(), identity);
        self
    }

    /// Forces every operation to return the given error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Publishes a signed-in identity directly (test shortcut).
    pub fn set_current(&self, identity: Option<Identity>) {
        self.current.send_replace(identity);
    }

    fn fresh_identity(email: Option<String>) -> Identity {
        Identity::new(
            IdentityId::new(Uuid::new_v4().to_string()).expect("uuid is non-empty"),
            email,
            None,
            true,
        )
    }

    fn check_forced_error(&self) -> Result<(), AuthError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn sign_in_email(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let accounts = self.accounts.read().unwrap();
        let account = accounts.get(email).ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(account.identity.clone())
    }

    fn sign_in_social(&self, provider: SocialProvider, token: &str) -> Result<Identity, AuthError> {
        self.social_tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| {
                AuthError::ProviderRejected(format!(
                    "{} token was not recognized",
                    provider.display_name()
                ))
            })
    }

    fn sign_in_phone(&self, verification_id: &str, code: &str) -> Result<Identity, AuthError> {
        let mut pending = self.pending_codes.write().unwrap();
        if !pending.contains_key(verification_id) {
            return Err(AuthError::InvalidCredentials);
        }
        if code != MOCK_VERIFICATION_CODE {
            return Err(AuthError::InvalidCredentials);
        }
        pending.remove(verification_id);
        // Phone accounts have no email address.
        Ok(Self::fresh_identity(None))
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>, AuthError> {
        self.check_forced_error()?;
        Ok(self.current.borrow().clone())
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        self.check_forced_error()?;
        let identity = match credentials {
            Credentials::EmailPassword { email, password } => {
                self.sign_in_email(&email, password.expose_secret())?
            }
            Credentials::SocialToken { provider, token } => {
                self.sign_in_social(provider, token.expose_secret())?
            }
            Credentials::PhoneCode {
                verification_id,
                code,
            } => self.sign_in_phone(&verification_id, &code)?,
        };
        self.current.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<Identity, AuthError> {
        self.check_forced_error()?;
        let (email, password) = match credentials {
            Credentials::EmailPassword { email, password } => (email, password),
            other => {
                return Err(AuthError::ProviderRejected(format!(
                    "sign-up requires email credentials, got {:?}",
                    other
                )))
            }
        };
        let mut accounts = self.accounts.write().unwrap();
        if accounts.contains_key(&email) {
            return Err(AuthError::EmailAlreadyInUse);
        }
        let identity = Self::fresh_identity(Some(email.clone()));
        accounts.insert(
            email,
            Account {
                identity: identity.clone(),
                password: password.expose_secret().to_string(),
            },
        );
        self.current.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.check_forced_error()?;
        self.current.send_replace(None);
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.check_forced_error()?;
        if self.accounts.read().unwrap().contains_key(email) {
            Ok(())
        } else {
            Err(AuthError::UserNotFound)
        }
    }

    async fn request_verification_code(&self, phone_number: &str) -> Result<String, AuthError> {
        self.check_forced_error()?;
        let verification_id = Uuid::new_v4().to_string();
        self.pending_codes
            .write()
            .unwrap()
            .insert(verification_id.clone(), phone_number.to_string());
        Ok(verification_id)
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }
}
