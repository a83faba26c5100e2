//! Filter documents and sort specifications for post queries.
//!
//! Filters are conjunctions over a closed set of stored fields, so callers
//! can never filter or sort on an unrecognized field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Post;

/// Declarative predicate selecting a subset of stored posts. Every set field
/// must match; the default filter matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    pub id: Option<Uuid>,
    pub author: Option<Uuid>,
    pub tag: Option<String>,
}

impl PostFilter {
    /// Filter matching every post.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_author(author: Uuid) -> Self {
        Self {
            author: Some(author),
            ..Self::default()
        }
    }

    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// The ownership-gate predicate: a specific post, but only when owned by
    /// `author`. Used by conditional update and delete so the authorization
    /// check and the mutation are a single store operation.
    pub fn owned(id: Uuid, author: Uuid) -> Self {
        Self {
            id: Some(id),
            author: Some(author),
            tag: None,
        }
    }

    /// Predicate semantics, shared by every store backend. Tag filters match
    /// containment: the post's tag list must include the requested tag.
    pub fn matches(&self, post: &Post) -> bool {
        if self.id.is_some_and(|id| id != post.id) {
            return false;
        }
        if self.author.is_some_and(|author| author != post.author) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !post.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }
}

/// Stored field a result set can be sorted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Options for list operations. Defaults to newest-first by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl ListOptions {
    pub fn new(sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }
}
