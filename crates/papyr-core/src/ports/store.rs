use async_trait::async_trait;

use crate::domain::{Post, PostPatch};
use crate::error::StoreError;
use crate::query::{ListOptions, PostFilter};

/// Post store contract - abstraction over the document store backend.
///
/// Conditional operations (`find_one_and_update`, `delete_one`) must evaluate
/// their filter and apply the mutation as one atomic step. The service relies
/// on this to fuse the ownership check into the mutation; splitting it into a
/// read followed by a write would open a race window.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert one document. Returns the stored post.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// Find at most one document matching the filter.
    async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, StoreError>;

    /// Find all documents matching the filter, ordered per `options`.
    /// Ordering is total on the sort key; documents with equal keys appear in
    /// insertion order, regardless of sort direction.
    async fn find(&self, filter: PostFilter, options: ListOptions) -> Result<Vec<Post>, StoreError>;

    /// Atomically apply `patch` to the first document matching the filter and
    /// refresh its `updated_at`. Returns the updated post, or `None` when
    /// nothing matched.
    async fn find_one_and_update(
        &self,
        filter: PostFilter,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError>;

    /// Delete at most one document matching the filter. Returns the number of
    /// documents deleted (0 or 1); an empty match is not an error.
    async fn delete_one(&self, filter: PostFilter) -> Result<u64, StoreError>;
}
