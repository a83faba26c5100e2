//! The post service: query composition plus the ownership-enforced mutation
//! gate. Reads are unscoped; update and delete only ever touch a post whose
//! author equals the acting identity, checked inside the same store operation
//! as the mutation itself.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::DomainError;
use crate::ports::{PostStore, UserDirectory};
use crate::query::{ListOptions, PostFilter};

/// A way of naming an author: directly by id, or by username resolved through
/// the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorRef {
    Id(Uuid),
    Username(String),
}

impl From<Uuid> for AuthorRef {
    fn from(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for AuthorRef {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for AuthorRef {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

/// Post access-control and query service.
pub struct PostService {
    store: Arc<dyn PostStore>,
    users: Arc<dyn UserDirectory>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self { store, users }
    }

    /// Create a post owned by `author_id`. The author is always the acting
    /// identity; it is not part of the input and cannot be supplied by the
    /// caller. Fails with a validation error before any store interaction
    /// when the title is missing or blank.
    pub async fn create(&self, author_id: Uuid, new_post: NewPost) -> Result<Post, DomainError> {
        if new_post.title.trim().is_empty() {
            return Err(DomainError::Validation(
                "`title` is required and must not be empty".to_string(),
            ));
        }

        let post = Post::new(author_id, new_post);
        let post = self.store.insert(post).await?;

        tracing::debug!(post_id = %post.id, author = %post.author, "Post created");
        Ok(post)
    }

    /// List every stored post.
    pub async fn list_all(&self, options: ListOptions) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find(PostFilter::all(), options).await?)
    }

    /// List posts by author. A username that resolves to no user yields an
    /// empty list, not an error.
    pub async fn list_by_author(
        &self,
        author: impl Into<AuthorRef>,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        let author_id = match author.into() {
            AuthorRef::Id(id) => id,
            AuthorRef::Username(username) => {
                match self.users.find_by_username(&username).await? {
                    Some(user) => user.id,
                    None => {
                        tracing::debug!(%username, "Unknown author username, empty result");
                        return Ok(Vec::new());
                    }
                }
            }
        };

        Ok(self
            .store
            .find(PostFilter::by_author(author_id), options)
            .await?)
    }

    /// List posts carrying the given tag.
    pub async fn list_by_tag(
        &self,
        tag: &str,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find(PostFilter::by_tag(tag), options).await?)
    }

    /// Unauthenticated read of a single post.
    pub async fn get_by_id(&self, post_id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.store.find_one(PostFilter::by_id(post_id)).await?)
    }

    /// Apply a partial update to a post owned by `author_id`. The ownership
    /// check rides in the store filter, so check and write are one atomic
    /// operation. Returns `None` both when the post does not exist and when
    /// it is owned by someone else; the two cases are indistinguishable to
    /// the caller so non-owners learn nothing about a post's existence.
    pub async fn update(
        &self,
        author_id: Uuid,
        post_id: Uuid,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let updated = self
            .store
            .find_one_and_update(PostFilter::owned(post_id, author_id), patch)
            .await?;

        tracing::debug!(%post_id, matched = updated.is_some(), "Post update attempted");
        Ok(updated)
    }

    /// Delete a post owned by `author_id`. Returns the number of posts
    /// deleted (0 or 1); a miss, whether nonexistent or non-owned, is a
    /// normal zero-count outcome.
    pub async fn delete(&self, author_id: Uuid, post_id: Uuid) -> Result<u64, DomainError> {
        let deleted = self
            .store
            .delete_one(PostFilter::owned(post_id, author_id))
            .await?;

        tracing::debug!(%post_id, deleted, "Post delete attempted");
        Ok(deleted)
    }
}
