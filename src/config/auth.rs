//! Authentication configuration

use serde::Deserialize;

/// Settings for real identity-provider adapters.
///
/// The flow core only carries these; a provider integration crate consumes
/// them when wiring social sign-in.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// OAuth client id for Google sign-in
    pub google_client_id: Option<String>,

    /// App id for Facebook sign-in
    pub facebook_app_id: Option<String>,
}
