//! The top-level screen enum and its transition rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Which top-level screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowScreen {
    /// Sign-in / sign-up surface.
    Auth,
    /// Onboarding introduction (stateless, emits continue/skip).
    OnboardingIntro,
    /// The preference questionnaire wizard.
    Questionnaire,
    /// The main application (navigation inside it is out of scope).
    Main,
}

impl StateMachine for FlowScreen {
    /// User-driven transitions. A sign-out returns any screen to `Auth`;
    /// identity-driven re-evaluation (a fresh sign-in resolving directly
    /// to `Main` or `OnboardingIntro`) is a reset, not a transition, and
    /// is not modeled here.
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlowScreen::*;
        if *target == Auth {
            return *self != Auth;
        }
        matches!(
            (self, target),
            (Auth, OnboardingIntro)
                | (Auth, Main)
                | (OnboardingIntro, Questionnaire)
                | (OnboardingIntro, Main)
                | (Questionnaire, Main)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlowScreen::*;
        match self {
            Auth => vec![OnboardingIntro, Main],
            OnboardingIntro => vec![Questionnaire, Main, Auth],
            Questionnaire => vec![Main, Auth],
            Main => vec![Auth],
        }
    }
}

/// The externally visible condition of the flow. While the controller is
/// resolving identity at startup, the UI shows a loading indicator that is
/// not itself a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleState {
    Loading,
    Screen(FlowScreen),
}
