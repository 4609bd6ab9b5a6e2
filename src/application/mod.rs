//! Application layer - orchestration over domain and ports.

mod flow_controller;
mod onboarding_store;

pub use flow_controller::FlowController;
pub use onboarding_store::OnboardingStore;
