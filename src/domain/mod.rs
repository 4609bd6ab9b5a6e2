//! Domain layer - value objects and pure state machines.

pub mod flow;
pub mod foundation;
pub mod identity;
pub mod onboarding;
