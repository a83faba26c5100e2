use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::error::StoreError;

/// User directory - read-only lookup into the external identity system.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a user by exact username match.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}
