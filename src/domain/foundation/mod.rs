//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers, and error types that form the vocabulary
//! of the VitalPal domain.

mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{IdentityId, QuestionId};
pub use percentage::Percentage;
pub use state_machine::{InvalidTransition, StateMachine};
pub use timestamp::Timestamp;
