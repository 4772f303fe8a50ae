//! PostgreSQL repository tests. Need a database reachable via `DATABASE_URL`:
//!
//! ```bash
//! cargo test --features test-postgres
//! ```

#![cfg(feature = "test-postgres")]

use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use named_links::application::services::LinkService;
use named_links::domain::entities::LinkInput;
use named_links::domain::repositories::{LinkRepository, RepositoryError};
use named_links::error::LinkError;
use named_links::infrastructure::persistence::PgLinkRepository;

fn repo(pool: PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_insert_link(pool: PgPool) {
    let repo = repo(pool);

    let link = repo
        .insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    assert_eq!(link.name, "docs");
    assert_eq!(link.url, "https://docs.rs");
    assert!(!link.id.is_nil());
}

#[sqlx::test]
async fn test_insert_duplicate_name(pool: PgPool) {
    let repo = repo(pool);
    repo.insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    let result = repo
        .insert(LinkInput::new("docs", "https://example.com"))
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(name)) if name == "docs"));
}

#[sqlx::test]
async fn test_insert_empty_name_rejected(pool: PgPool) {
    let repo = repo(pool);

    let result = repo.insert(LinkInput::new("", "https://docs.rs")).await;

    assert!(matches!(result, Err(RepositoryError::Rejected(_))));
}

#[sqlx::test]
async fn test_find_by_name_and_id(pool: PgPool) {
    let repo = repo(pool);
    let created = repo
        .insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    let by_name = repo.find_by_name("docs").await.unwrap();
    let by_id = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(by_name.as_ref(), Some(&created));
    assert_eq!(by_id, Some(created));
}

#[sqlx::test]
async fn test_find_missing(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_name("nothing").await.unwrap().is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_all(pool: PgPool) {
    let repo = repo(pool);
    assert!(repo.find_all().await.unwrap().is_empty());

    repo.insert(LinkInput::new("a", "https://a.example"))
        .await
        .unwrap();
    repo.insert(LinkInput::new("b", "https://b.example"))
        .await
        .unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[sqlx::test]
async fn test_update_link(pool: PgPool) {
    let repo = repo(pool);
    let created = repo
        .insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    let updated = repo
        .update(created.id, LinkInput::new("rustdocs", "https://doc.rust-lang.org"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "rustdocs");
    assert!(repo.find_by_name("docs").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let repo = repo(pool);
    let id = Uuid::new_v4();

    let result = repo
        .update(id, LinkInput::new("docs", "https://docs.rs"))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(missing)) if missing == id));
}

#[sqlx::test]
async fn test_update_to_taken_name(pool: PgPool) {
    let repo = repo(pool);
    repo.insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();
    let other = repo
        .insert(LinkInput::new("crates", "https://crates.io"))
        .await
        .unwrap();

    let result = repo
        .update(other.id, LinkInput::new("docs", "https://crates.io"))
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let repo = repo(pool);
    let created = repo
        .insert(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    assert_eq!(repo.delete(created.id).await.unwrap(), 1);
    assert_eq!(repo.delete(created.id).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    assert!(repo(pool).ping().await.is_ok());
}

#[sqlx::test]
async fn test_concurrent_creates_same_name(pool: PgPool) {
    let service = Arc::new(LinkService::new(Arc::new(repo(pool))));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_link(LinkInput::new("race", format!("https://example.com/{i}")))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(LinkError::DuplicateName { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(created, 1);
}
