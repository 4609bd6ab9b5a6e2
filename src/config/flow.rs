//! Flow controller configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Flow controller tuning
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Bound on startup identity resolution, in seconds
    #[serde(default = "default_resolve_timeout")]
    pub resolve_timeout_secs: u64,
}

fn default_resolve_timeout() -> u64 {
    10
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            resolve_timeout_secs: default_resolve_timeout(),
        }
    }
}

impl FlowConfig {
    /// The resolution timeout as a Duration
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }

    /// Validate the flow configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resolve_timeout_secs == 0 {
            return Err(ValidationError::InvalidResolveTimeout);
        }
        Ok(())
    }
}
