use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a user in the external identity system. Posts store only the
/// user's id; the record is consumed to resolve author-by-username filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
}
