//! Application flow controller.
//!
//! Decides which top-level screen is presented, driven by identity state
//! and the persisted onboarding flag. Every operation is triggered by a
//! discrete external event (startup, identity-change notification, user
//! action) and runs to completion before the next; the `&mut self`
//! receivers make interleaving impossible, and the `initializing` flag
//! keeps startup resolution single-flight.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::flow::{FlowScreen, VisibleState};
use crate::domain::foundation::StateMachine;
use crate::domain::identity::Identity;
use crate::domain::onboarding::UserAnswers;
use crate::ports::{FlagStore, IdentityProvider};

use super::OnboardingStore;

const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(10);

/// The top-level screen state machine.
pub struct FlowController {
    identity_provider: Arc<dyn IdentityProvider>,
    onboarding: OnboardingStore,
    skip_enabled: bool,
    resolve_timeout: Duration,
    screen: FlowScreen,
    identity: Option<Identity>,
    answers: Option<UserAnswers>,
    initializing: bool,
}

impl FlowController {
    /// Creates a controller in its initial state: `Auth` screen, loading
    /// indicator visible until [`initialize`](Self::initialize) settles.
    pub fn new(identity_provider: Arc<dyn IdentityProvider>, flag_store: Arc<dyn FlagStore>) -> Self {
        Self {
            identity_provider,
            onboarding: OnboardingStore::new(flag_store),
            skip_enabled: false,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            screen: FlowScreen::Auth,
            identity: None,
            answers: None,
            initializing: true,
        }
    }

    /// Applies configuration: skip feature flag and resolution timeout.
    pub fn with_config(
        config: &AppConfig,
        identity_provider: Arc<dyn IdentityProvider>,
        flag_store: Arc<dyn FlagStore>,
    ) -> Self {
        Self::new(identity_provider, flag_store)
            .skip_enabled(config.features.onboarding_skip)
            .resolve_timeout(config.flow.resolve_timeout())
    }

    /// Enables or disables the onboarding "skip" transition.
    pub fn skip_enabled(mut self, enabled: bool) -> Self {
        self.skip_enabled = enabled;
        self
    }

    /// Sets the bound on startup identity resolution.
    pub fn resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    /// Startup resolution: queries the identity provider once and settles
    /// on a screen. A second call (or a call racing a finished one) is a
    /// no-op; resolution failures and timeouts fall back to `Auth`.
    pub async fn initialize(&mut self) {
        if !self.initializing {
            debug!("initialize called after startup resolution already settled");
            return;
        }
        let identity = match timeout(
            self.resolve_timeout,
            self.identity_provider.current_identity(),
        )
        .await
        {
            Ok(Ok(identity)) => identity,
            Ok(Err(e)) => {
                warn!(error = %e, "identity resolution failed, falling back to auth screen");
                None
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.resolve_timeout.as_secs(),
                    "identity resolution timed out, falling back to auth screen"
                );
                None
            }
        };
        self.settle(identity).await;
    }

    /// Handles an identity-change notification from the provider. `None`
    /// (sign-out) returns to `Auth` and discards in-memory answers.
    pub async fn on_identity_changed(&mut self, identity: Option<Identity>) {
        self.settle(identity).await;
    }

    /// Re-evaluates the active screen for the given identity.
    ///
    /// This is a reset, not a screen-to-screen transition: a provider
    /// notification can land anywhere (e.g. switching straight from
    /// `Main` to a not-yet-onboarded account).
    async fn settle(&mut self, identity: Option<Identity>) {
        self.initializing = false;
        match identity {
            None => {
                self.identity = None;
                self.answers = None;
                self.screen = FlowScreen::Auth;
            }
            Some(identity) => {
                if self.onboarding.has_completed(&identity.id).await {
                    self.answers = self.onboarding.load_answers(&identity.id).await;
                    self.screen = FlowScreen::Main;
                } else {
                    // Don't carry a previous account's answers across.
                    self.answers = None;
                    self.screen = FlowScreen::OnboardingIntro;
                }
                self.identity = Some(identity);
            }
        }
        debug!(screen = ?self.screen, "flow settled");
    }

    /// "Continue" from the onboarding intro: moves to the questionnaire.
    /// Persists nothing. Ignored on any other screen.
    pub fn continue_onboarding(&mut self) {
        self.apply(FlowScreen::Questionnaire);
    }

    /// "Skip" from the onboarding intro: marks onboarding completed
    /// (best-effort) and moves to `Main`. Requires a signed-in identity
    /// and the skip feature flag; ignored otherwise.
    pub async fn skip_onboarding(&mut self) {
        if self.screen != FlowScreen::OnboardingIntro {
            debug!(screen = ?self.screen, "skip ignored outside onboarding intro");
            return;
        }
        if !self.skip_enabled {
            debug!("skip ignored: onboarding_skip feature is disabled");
            return;
        }
        let Some(identity) = self.identity.clone() else {
            debug!("skip ignored: no identity present");
            return;
        };
        self.onboarding.mark_completed(&identity.id).await;
        self.apply(FlowScreen::Main);
    }

    /// Questionnaire completion: stores the answers, persists the flag
    /// and answers best-effort, and moves to `Main`. Ignored off the
    /// questionnaire screen.
    pub async fn complete_questionnaire(&mut self, answers: UserAnswers) {
        if self.screen != FlowScreen::Questionnaire {
            debug!(screen = ?self.screen, "completion ignored outside questionnaire");
            return;
        }
        if let Some(identity) = self.identity.clone() {
            self.onboarding.mark_completed(&identity.id).await;
            self.onboarding.save_answers(&identity.id, &answers).await;
        }
        self.answers = Some(answers);
        self.apply(FlowScreen::Main);
    }

    /// Performs a user-driven screen transition, validated against the
    /// screen state machine.
    fn apply(&mut self, target: FlowScreen) {
        match self.screen.transition_to(target) {
            Ok(next) => self.screen = next,
            Err(e) => debug!(error = %e, "screen transition ignored"),
        }
    }

    /// What the UI should render right now.
    pub fn visible_state(&self) -> VisibleState {
        if self.initializing {
            VisibleState::Loading
        } else {
            VisibleState::Screen(self.screen)
        }
    }

    pub fn screen(&self) -> FlowScreen {
        self.screen
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn answers(&self) -> Option<&UserAnswers> {
        self.answers.as_ref()
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }
}
