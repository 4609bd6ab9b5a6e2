//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the flow core and the outside world. Adapters implement these ports.
//!
//! - `IdentityProvider` - sign-in/out and current-identity notifications
//! - `FlagStore` - per-identity key-value persistence

mod flag_store;
mod identity_provider;

pub use flag_store::{FlagStore, StorageError};
pub use identity_provider::IdentityProvider;
