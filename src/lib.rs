//! VitalPal Core - Wellness companion application flow.
//!
//! This crate implements the top-level application flow of the VitalPal
//! wellness app as explicit state machines: which screen is active
//! (authentication, onboarding intro, questionnaire, main), driven by
//! identity state and persisted onboarding flags. Rendering is an external
//! collaborator; this crate owns the transitions, the ports they depend on,
//! and reference adapters for those ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
