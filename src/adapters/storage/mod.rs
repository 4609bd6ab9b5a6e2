//! Flag store adapters.

mod file;
mod in_memory;

pub use file::FileFlagStore;
pub use in_memory::InMemoryFlagStore;
