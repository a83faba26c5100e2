//! # Papyr Infrastructure
//!
//! Concrete implementations of the ports defined in `papyr-core`.
//! This crate contains the in-memory store and user-directory adapters used
//! when no external database is configured, plus their configuration.

pub mod config;
pub mod directory;
pub mod store;

pub use config::MemoryStoreConfig;
pub use directory::InMemoryUserDirectory;
pub use store::InMemoryPostStore;
