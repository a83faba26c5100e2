//! In-memory post store - used when no external database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use papyr_core::domain::{Post, PostPatch};
use papyr_core::error::StoreError;
use papyr_core::ports::PostStore;
use papyr_core::query::{ListOptions, PostFilter, SortKey, SortOrder};

use crate::config::MemoryStoreConfig;

struct StoredPost {
    /// Insertion sequence, the backend's natural order. Breaks ties between
    /// equal sort keys and picks the winner for single-document operations
    /// when the filter matches more than one post.
    seq: u64,
    post: Post,
}

struct StoreInner {
    posts: HashMap<Uuid, StoredPost>,
    next_seq: u64,
}

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Conditional update and delete evaluate their filter and mutate under a
/// single write-lock acquisition, which is this backend's form of the
/// single-document atomicity the `PostStore` contract requires.
pub struct InMemoryPostStore {
    config: MemoryStoreConfig,
    inner: RwLock<StoreInner>,
}

impl InMemoryPostStore {
    pub fn new(config: MemoryStoreConfig) -> Self {
        tracing::info!(
            max_documents = config.max_documents,
            "In-memory post store initialized"
        );
        Self {
            config,
            inner: RwLock::new(StoreInner {
                posts: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    /// `updated_at` must strictly increase per mutation, even when the wall
    /// clock has not advanced since the previous write.
    fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
        let now = Utc::now();
        if now > previous {
            now
        } else {
            previous + Duration::microseconds(1)
        }
    }

    fn compare(a: &Post, b: &Post, options: ListOptions) -> std::cmp::Ordering {
        let key = match options.sort_by {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::Title => a.title.cmp(&b.title),
        };
        match options.sort_order {
            SortOrder::Ascending => key,
            SortOrder::Descending => key.reverse(),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new(MemoryStoreConfig::default())
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        if self.config.max_documents > 0 && inner.posts.len() >= self.config.max_documents {
            return Err(StoreError::Query(format!(
                "Store capacity exceeded ({} documents)",
                self.config.max_documents
            )));
        }
        if inner.posts.contains_key(&post.id) {
            return Err(StoreError::Query(format!("Duplicate post id: {}", post.id)));
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.posts.insert(
            post.id,
            StoredPost {
                seq,
                post: post.clone(),
            },
        );

        tracing::debug!(post_id = %post.id, seq, "Document inserted");
        Ok(post)
    }

    async fn find_one(&self, filter: PostFilter) -> Result<Option<Post>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .values()
            .filter(|stored| filter.matches(&stored.post))
            .min_by_key(|stored| stored.seq)
            .map(|stored| stored.post.clone()))
    }

    async fn find(&self, filter: PostFilter, options: ListOptions) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.read().await;

        let mut matched: Vec<(u64, Post)> = inner
            .posts
            .values()
            .filter(|stored| filter.matches(&stored.post))
            .map(|stored| (stored.seq, stored.post.clone()))
            .collect();

        matched.sort_by(|(seq_a, a), (seq_b, b)| {
            Self::compare(a, b, options).then(seq_a.cmp(seq_b))
        });

        Ok(matched.into_iter().map(|(_, post)| post).collect())
    }

    async fn find_one_and_update(
        &self,
        filter: PostFilter,
        patch: PostPatch,
    ) -> Result<Option<Post>, StoreError> {
        // Filter evaluation and mutation happen under one write lock.
        let mut inner = self.inner.write().await;

        let target = inner
            .posts
            .values()
            .filter(|stored| filter.matches(&stored.post))
            .min_by_key(|stored| stored.seq)
            .map(|stored| stored.post.id);

        let Some(id) = target else {
            return Ok(None);
        };
        let Some(stored) = inner.posts.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(&mut stored.post);
        stored.post.updated_at = Self::advance(stored.post.updated_at);

        tracing::debug!(post_id = %id, "Document updated");
        Ok(Some(stored.post.clone()))
    }

    async fn delete_one(&self, filter: PostFilter) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;

        let target = inner
            .posts
            .values()
            .filter(|stored| filter.matches(&stored.post))
            .min_by_key(|stored| stored.seq)
            .map(|stored| stored.post.id);

        match target {
            Some(id) => {
                inner.posts.remove(&id);
                tracing::debug!(post_id = %id, "Document deleted");
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
