//! Per-identity onboarding persistence over the flag store.
//!
//! Owns the key scheme (`hasCompletedOnboarding_<id>`, `userAnswers_<id>`)
//! and the fail-open policy: a failed read counts as "not completed" /
//! "no saved answers", a failed write is logged and progress continues.
//! Failures never cross this boundary.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::IdentityId;
use crate::domain::onboarding::UserAnswers;
use crate::ports::FlagStore;

const COMPLETED_PREFIX: &str = "hasCompletedOnboarding_";
const ANSWERS_PREFIX: &str = "userAnswers_";
const COMPLETED_VALUE: &str = "true";

/// Typed access to the two onboarding keys of an identity.
#[derive(Clone)]
pub struct OnboardingStore {
    store: Arc<dyn FlagStore>,
}

impl OnboardingStore {
    pub fn new(store: Arc<dyn FlagStore>) -> Self {
        Self { store }
    }

    fn completed_key(id: &IdentityId) -> String {
        format!("{}{}", COMPLETED_PREFIX, id)
    }

    fn answers_key(id: &IdentityId) -> String {
        format!("{}{}", ANSWERS_PREFIX, id)
    }

    /// Whether this identity has completed onboarding. Read failures count
    /// as not completed.
    pub async fn has_completed(&self, id: &IdentityId) -> bool {
        let key = Self::completed_key(id);
        match self.store.get(&key).await {
            Ok(value) => value.as_deref() == Some(COMPLETED_VALUE),
            Err(e) => {
                warn!(key = %key, error = %e, "onboarding flag read failed, assuming not completed");
                false
            }
        }
    }

    /// The identity's saved answers, if present and parseable.
    pub async fn load_answers(&self, id: &IdentityId) -> Option<UserAnswers> {
        let key = Self::answers_key(id);
        let json = match self.store.get(&key).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %key, error = %e, "saved answers read failed");
                return None;
            }
        };
        match UserAnswers::from_json(&json) {
            Ok(answers) => Some(answers),
            Err(e) => {
                warn!(key = %key, error = %e, "saved answers could not be parsed");
                None
            }
        }
    }

    /// Marks onboarding completed. Best-effort: failures are logged.
    pub async fn mark_completed(&self, id: &IdentityId) {
        let key = Self::completed_key(id);
        if let Err(e) = self.store.set(&key, COMPLETED_VALUE).await {
            warn!(key = %key, error = %e, "onboarding flag write failed");
        }
    }

    /// Saves the answer set. Best-effort: failures are logged.
    pub async fn save_answers(&self, id: &IdentityId, answers: &UserAnswers) {
        let key = Self::answers_key(id);
        let json = match answers.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "answers could not be serialized");
                return;
            }
        };
        if let Err(e) = self.store.set(&key, &json).await {
            warn!(key = %key, error = %e, "answers write failed");
        }
    }
}
