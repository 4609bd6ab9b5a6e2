//! Phone sign-in verification state machine.
//!
//! The intended flow is request code, then verify code. Code dispatch and
//! any human-verification challenge are the provider's concern behind
//! `IdentityProvider::request_verification_code`; this machine only tracks
//! where the user is in the flow. A wrong code keeps the machine in
//! `CodeSent` so the user can retry.

use crate::domain::foundation::{InvalidTransition, StateMachine};

use super::Credentials;

/// Stages of the phone verification flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneVerificationStage {
    /// User is entering their phone number.
    EnteringNumber,
    /// A verification code has been dispatched.
    CodeSent,
    /// The provider accepted the code.
    Verified,
}

impl StateMachine for PhoneVerificationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PhoneVerificationStage::*;
        matches!(
            (self, target),
            (EnteringNumber, CodeSent) | (CodeSent, Verified) | (CodeSent, EnteringNumber)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PhoneVerificationStage::*;
        match self {
            EnteringNumber => vec![CodeSent],
            CodeSent => vec![Verified, EnteringNumber],
            Verified => vec![],
        }
    }
}

/// Tracks one phone sign-in attempt.
#[derive(Debug, Clone)]
pub struct PhoneVerification {
    stage: PhoneVerificationStage,
    verification_id: Option<String>,
}

impl PhoneVerification {
    /// Starts a fresh verification at the number-entry stage.
    pub fn new() -> Self {
        Self {
            stage: PhoneVerificationStage::EnteringNumber,
            verification_id: None,
        }
    }

    /// Records that the provider dispatched a code for this attempt.
    pub fn code_sent(&mut self, verification_id: impl Into<String>) -> Result<(), InvalidTransition> {
        self.stage = self.stage.transition_to(PhoneVerificationStage::CodeSent)?;
        self.verification_id = Some(verification_id.into());
        Ok(())
    }

    /// Builds the credentials to submit the entered code.
    ///
    /// Only valid once a code has been sent.
    pub fn credentials(&self, code: impl Into<String>) -> Result<Credentials, InvalidTransition> {
        match (&self.stage, &self.verification_id) {
            (PhoneVerificationStage::CodeSent, Some(id)) => Ok(Credentials::PhoneCode {
                verification_id: id.clone(),
                code: code.into(),
            }),
            _ => Err(InvalidTransition {
                from: format!("{:?}", self.stage),
                to: format!("{:?}", PhoneVerificationStage::Verified),
            }),
        }
    }

    /// Marks the attempt verified after the provider accepted the code.
    pub fn verified(&mut self) -> Result<(), InvalidTransition> {
        self.stage = self.stage.transition_to(PhoneVerificationStage::Verified)?;
        Ok(())
    }

    /// Abandons the sent code and returns to number entry.
    pub fn restart(&mut self) -> Result<(), InvalidTransition> {
        self.stage = self
            .stage
            .transition_to(PhoneVerificationStage::EnteringNumber)?;
        self.verification_id = None;
        Ok(())
    }

    /// Current stage of the attempt.
    pub fn stage(&self) -> PhoneVerificationStage {
        self.stage
    }

    /// Verification id issued by the provider, once a code was sent.
    pub fn verification_id(&self) -> Option<&str> {
        self.verification_id.as_deref()
    }
}

impl Default for PhoneVerification {
    fn default() -> Self {
        Self::new()
    }
}
