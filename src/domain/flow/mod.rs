//! Flow domain - top-level screen selection.

mod screen;

pub use screen::{FlowScreen, VisibleState};
