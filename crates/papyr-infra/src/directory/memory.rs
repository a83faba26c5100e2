//! In-memory user directory - used when no external identity system is
//! configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use papyr_core::domain::UserRecord;
use papyr_core::error::StoreError;
use papyr_core::ports::UserDirectory;

/// In-memory user directory keyed by username (exact match).
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a user record, returning it with its assigned id.
    pub async fn insert_user(&self, username: &str) -> UserRecord {
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };

        let mut users = self.users.write().await;
        users.insert(username.to_string(), record.clone());

        tracing::debug!(%username, user_id = %record.id, "User record seeded");
        record
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}
