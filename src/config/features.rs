//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Expose the onboarding "skip" transition. Off by default: the skip
    /// path exists in the product but is not wired into the primary flow.
    #[serde(default)]
    pub onboarding_skip: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_is_disabled_by_default() {
        assert!(!FeatureFlags::default().onboarding_skip);
    }

    #[test]
    fn deserializes_from_json() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"onboarding_skip":true}"#).unwrap();
        assert!(flags.onboarding_skip);
    }
}
