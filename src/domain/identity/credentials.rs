//! Credential values and sign-in/sign-up form validation.
//!
//! Validation mirrors the product rules: a usable email, a password of at
//! least [`MIN_PASSWORD_LEN`] characters, matching confirmation on
//! sign-up, and at least [`MIN_PHONE_DIGITS`] digits in a phone number.
//! Secrets never appear in `Debug` output (`secrecy`).

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::ValidationError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum digits required in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Third-party sign-in providers supported by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    /// Display name shown in auth UI and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

/// Credentials accepted by `IdentityProvider::sign_in` / `sign_up`.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Email and password.
    EmailPassword {
        email: String,
        password: SecretString,
    },
    /// Token obtained from a third-party provider's credential exchange.
    SocialToken {
        provider: SocialProvider,
        token: SecretString,
    },
    /// Code entered after a phone verification dispatch.
    PhoneCode {
        verification_id: String,
        code: String,
    },
}

/// Sign-in form input.
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
}

impl SignInForm {
    /// Validates the form, yielding credentials or all field errors.
    pub fn validate(self) -> Result<Credentials, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = validate_email(&self.email) {
            errors.push(e);
        }
        if let Err(e) = validate_password(&self.password) {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(Credentials::EmailPassword {
                email: self.email,
                password: self.password,
            })
        } else {
            Err(errors)
        }
    }
}

/// Sign-up form input.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUpForm {
    /// Validates the form, yielding credentials or all field errors.
    pub fn validate(self) -> Result<Credentials, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = validate_email(&self.email) {
            errors.push(e);
        }
        if let Err(e) = validate_password(&self.password) {
            errors.push(e);
        }
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            errors.push(ValidationError::invalid_format(
                "confirm_password",
                "passwords do not match",
            ));
        }
        if errors.is_empty() {
            Ok(Credentials::EmailPassword {
                email: self.email,
                password: self.password,
            })
        } else {
            Err(errors)
        }
    }
}

/// Normalizes a phone number for verification dispatch.
///
/// Requires at least [`MIN_PHONE_DIGITS`] digits; numbers without a
/// country code are prefixed with `+1`.
pub fn format_phone_number(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("phone_number"));
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::invalid_format(
            "phone_number",
            "valid phone number is required",
        ));
    }
    if trimmed.starts_with('+') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("+1{}", trimmed))
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if !trimmed.contains('@') {
        return Err(ValidationError::invalid_format(
            "email",
            "valid email is required",
        ));
    }
    Ok(())
}

fn validate_password(password: &SecretString) -> Result<(), ValidationError> {
    let len = password.expose_secret().chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(ValidationError::too_short("password", MIN_PASSWORD_LEN, len));
    }
    Ok(())
}
