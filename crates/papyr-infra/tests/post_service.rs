//! End-to-end tests of the post service wired against the in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use papyr_core::domain::{FieldUpdate, NewPost, Post, PostPatch, UserRecord};
use papyr_core::error::DomainError;
use papyr_core::query::{ListOptions, SortKey, SortOrder};
use papyr_core::service::PostService;
use papyr_infra::{InMemoryPostStore, InMemoryUserDirectory};

fn new_service() -> (PostService, Arc<InMemoryUserDirectory>) {
    let directory = Arc::new(InMemoryUserDirectory::new());
    let store = Arc::new(InMemoryPostStore::default());
    (PostService::new(store, directory.clone()), directory)
}

struct Fixture {
    service: PostService,
    marisa: UserRecord,
    joel: UserRecord,
    /// Created posts in creation order: marisa owns the first three, joel the
    /// last; only the third carries the `nodejs` tag.
    posts: Vec<Post>,
}

async fn seeded() -> Fixture {
    let (service, directory) = new_service();
    let marisa = directory.insert_user("marisa").await;
    let joel = directory.insert_user("joel").await;

    let samples = [
        (marisa.id, "Learning Redux", vec!["redux"]),
        (marisa.id, "Learn React Hooks", vec!["react"]),
        (marisa.id, "Full-Stack Rust Projects", vec!["react", "nodejs"]),
        (joel.id, "Guide to TypeScript", vec![]),
    ];

    let mut posts = Vec::new();
    for (author, title, tags) in samples {
        let post = service
            .create(
                author,
                NewPost {
                    title: title.to_string(),
                    contents: None,
                    tags: tags.into_iter().map(|t| t.to_string()).collect(),
                },
            )
            .await
            .unwrap();
        posts.push(post);

        // Keep creation timestamps distinct so ordering assertions are exact.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    Fixture {
        service,
        marisa,
        joel,
        posts,
    }
}

fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

#[tokio::test]
async fn test_create_with_all_fields() {
    let (service, directory) = new_service();
    let author = directory.insert_user("marisa").await;

    let created = service
        .create(
            author.id,
            NewPost {
                title: "Hello Papyr!".to_string(),
                contents: Some("This post lives in the in-memory store.".to_string()),
                tags: vec!["rust".to_string(), "papyr".to_string()],
            },
        )
        .await
        .unwrap();

    assert_eq!(created.author, author.id);
    assert_eq!(created.created_at, created.updated_at);

    let found = service.get_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_create_with_minimal_fields() {
    let (service, directory) = new_service();
    let author = directory.insert_user("marisa").await;

    let created = service
        .create(
            author.id,
            NewPost {
                title: "Title".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(created.contents, None);
    assert!(created.tags.is_empty());
}

#[tokio::test]
async fn test_create_without_title_fails_before_any_side_effect() {
    let (service, directory) = new_service();
    let author = directory.insert_user("marisa").await;

    for title in ["", "   "] {
        let result = service
            .create(
                author.id,
                NewPost {
                    title: title.to_string(),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    // Nothing was stored.
    let posts = service.list_all(ListOptions::default()).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_all_returns_every_post_newest_first() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_all(ListOptions::default())
        .await
        .unwrap();

    assert_eq!(
        titles(&posts),
        vec![
            "Guide to TypeScript",
            "Full-Stack Rust Projects",
            "Learn React Hooks",
            "Learning Redux",
        ]
    );
}

#[tokio::test]
async fn test_list_all_honors_sort_options() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_all(ListOptions::new(SortKey::UpdatedAt, SortOrder::Ascending))
        .await
        .unwrap();

    assert_eq!(
        titles(&posts),
        vec![
            "Learning Redux",
            "Learn React Hooks",
            "Full-Stack Rust Projects",
            "Guide to TypeScript",
        ]
    );
}

#[tokio::test]
async fn test_list_by_author_username() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_by_author("marisa", ListOptions::default())
        .await
        .unwrap();

    assert_eq!(posts.len(), 3);
    for post in &posts {
        assert_eq!(post.author, fixture.marisa.id);
    }
}

#[tokio::test]
async fn test_list_by_author_id() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_by_author(fixture.joel.id, ListOptions::default())
        .await
        .unwrap();

    assert_eq!(titles(&posts), vec!["Guide to TypeScript"]);
}

#[tokio::test]
async fn test_list_by_unknown_username_is_empty_not_an_error() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_by_author("nobody", ListOptions::default())
        .await
        .unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_by_tag() {
    let fixture = seeded().await;

    let posts = fixture
        .service
        .list_by_tag("nodejs", ListOptions::default())
        .await
        .unwrap();

    assert_eq!(titles(&posts), vec!["Full-Stack Rust Projects"]);
}

#[tokio::test]
async fn test_get_by_id_misses_with_none() {
    let fixture = seeded().await;

    let found = fixture.service.get_by_id(Uuid::new_v4()).await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let fixture = seeded().await;
    let original = &fixture.posts[2];

    let updated = fixture
        .service
        .update(
            fixture.marisa.id,
            original.id,
            PostPatch {
                title: Some("Full-Stack Rust Projects, 2nd Edition".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Full-Stack Rust Projects, 2nd Edition");
    assert_eq!(updated.contents, original.contents);
    assert_eq!(updated.tags, original.tags);
    assert!(updated.updated_at > original.updated_at);
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn test_update_never_changes_the_author() {
    let fixture = seeded().await;
    let original = &fixture.posts[0];

    // The patch type has no author field; any permitted update leaves the
    // stored author exactly as created.
    let updated = fixture
        .service
        .update(
            fixture.marisa.id,
            original.id,
            PostPatch {
                title: Some("Still Marisa's".to_string()),
                contents: FieldUpdate::Set("Rewritten.".to_string()),
                tags: FieldUpdate::Clear,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.author, fixture.marisa.id);
}

#[tokio::test]
async fn test_update_by_non_owner_returns_none_and_leaves_post_unchanged() {
    let fixture = seeded().await;
    let original = &fixture.posts[0];

    let result = fixture
        .service
        .update(
            fixture.joel.id,
            original.id,
            PostPatch {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(result, None);

    let found = fixture.service.get_by_id(original.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(original));
}

#[tokio::test]
async fn test_update_nonexistent_post_returns_none() {
    let fixture = seeded().await;

    let result = fixture
        .service
        .update(
            fixture.marisa.id,
            Uuid::new_v4(),
            PostPatch {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_update_can_clear_contents_and_tags() {
    let fixture = seeded().await;
    let original = &fixture.posts[2];

    let updated = fixture
        .service
        .update(
            fixture.marisa.id,
            original.id,
            PostPatch {
                contents: FieldUpdate::Clear,
                tags: FieldUpdate::Set(Vec::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.contents, None);
    assert!(updated.tags.is_empty());
    assert_eq!(updated.title, original.title);
}

#[tokio::test]
async fn test_delete_by_owner_removes_the_post() {
    let fixture = seeded().await;
    let target = &fixture.posts[0];

    let deleted = fixture
        .service
        .delete(fixture.marisa.id, target.id)
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let found = fixture.service.get_by_id(target.id).await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn test_delete_by_non_owner_deletes_nothing() {
    let fixture = seeded().await;
    let target = &fixture.posts[0];

    let deleted = fixture
        .service
        .delete(fixture.joel.id, target.id)
        .await
        .unwrap();
    assert_eq!(deleted, 0);

    let found = fixture.service.get_by_id(target.id).await.unwrap();
    assert_eq!(found.as_ref(), Some(target));
}

#[tokio::test]
async fn test_delete_nonexistent_post_counts_zero() {
    let fixture = seeded().await;

    let deleted = fixture
        .service
        .delete(fixture.marisa.id, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(deleted, 0);
}
