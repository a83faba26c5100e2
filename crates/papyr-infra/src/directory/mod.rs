//! User directory implementations.

mod memory;

pub use memory::InMemoryUserDirectory;
