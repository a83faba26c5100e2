//! Adapter configuration.
//!
//! Configuration is an explicit struct handed to the adapter constructor,
//! built once at process start by the embedding application.

use std::env;

/// In-memory post store configuration.
#[derive(Debug, Clone)]
pub struct MemoryStoreConfig {
    /// Maximum number of stored documents (0 = unbounded).
    pub max_documents: usize,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self { max_documents: 0 }
    }
}

impl MemoryStoreConfig {
    /// Load the configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_documents: env::var("POST_STORE_MAX_DOCUMENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }
}
