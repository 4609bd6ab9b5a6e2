//! Onboarding domain - the preference questionnaire.
//!
//! A fixed, ordered catalog of questions, the answer values they produce,
//! and the wizard state machine that collects them.

mod answers;
mod engine;
mod question;

pub use answers::{Answer, UserAnswers};
pub use engine::{EngineError, EngineOutcome, QuestionnaireEngine};
pub use question::{questionnaire, Question, QuestionKind};
