//! Identity domain - the signed-in principal and authentication values.
//!
//! Provider-neutral types: any identity backend (Firebase, OIDC) can
//! populate them through the `IdentityProvider` port.

mod credentials;
mod errors;
mod phone;
mod principal;

pub use credentials::{format_phone_number, Credentials, SignInForm, SignUpForm, SocialProvider};
pub use errors::AuthError;
pub use phone::{PhoneVerification, PhoneVerificationStage};
pub use principal::Identity;
