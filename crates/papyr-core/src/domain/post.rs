use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a content item owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// The identity that created the post. Set exactly once at creation;
    /// `PostPatch` carries no author field, so no update can change it.
    pub author: Uuid,
    pub title: String,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `author`. The id is assigned here and is
    /// immutable thereafter; creation counts as the first update, so both
    /// timestamps start equal.
    pub fn new(author: Uuid, new_post: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author,
            title: new_post.title,
            contents: new_post.contents,
            tags: new_post.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a post. The author is never taken from here - it is a
/// separate, required parameter of the create operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub contents: Option<String>,
    pub tags: Vec<String>,
}

/// Tri-state update for an optional field, so "not supplied" and "explicitly
/// cleared" stay distinguishable in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUpdate<T> {
    /// Leave the stored value untouched.
    #[default]
    Keep,
    /// Replace the stored value.
    Set(T),
    /// Reset the stored value to its empty default.
    Clear,
}

/// Partial update for a post. Unsupplied fields are left untouched; `title`
/// can be replaced but never cleared since it is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub contents: FieldUpdate<String>,
    pub tags: FieldUpdate<Vec<String>>,
}

impl PostPatch {
    /// Apply the patch to a stored post. Every store backend routes its
    /// conditional update through here so the patch semantics stay identical
    /// across backends. Does not touch `updated_at`; refreshing the timestamp
    /// is the store's responsibility once the mutation succeeds.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        match &self.contents {
            FieldUpdate::Keep => {}
            FieldUpdate::Set(contents) => post.contents = Some(contents.clone()),
            FieldUpdate::Clear => post.contents = None,
        }
        match &self.tags {
            FieldUpdate::Keep => {}
            FieldUpdate::Set(tags) => post.tags = tags.clone(),
            FieldUpdate::Clear => post.tags.clear(),
        }
    }

    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.contents == FieldUpdate::Keep
            && self.tags == FieldUpdate::Keep
    }
}
