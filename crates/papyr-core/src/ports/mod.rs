//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod directory;
mod store;

pub use directory::UserDirectory;
pub use store::PostStore;
