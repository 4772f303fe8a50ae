use std::sync::Arc;

use named_links::application::services::LinkService;
use named_links::domain::entities::{LinkInput, LinkLookup};
use named_links::infrastructure::persistence::InMemoryLinkRepository;

fn service() -> LinkService<InMemoryLinkRepository> {
    LinkService::new(Arc::new(InMemoryLinkRepository::new()))
}

#[tokio::test]
async fn test_create_then_get_by_id_returns_input() {
    let service = service();
    let inputs = [
        ("docs", "https://docs.rs"),
        ("кириллица", "https://пример.рф/путь?q=1"),
        ("with space", "http://localhost:8080/a/b#frag"),
    ];

    for (name, url) in inputs {
        let created = service
            .create_link(LinkInput::new(name, url))
            .await
            .unwrap();

        let found = service
            .get_link(&LinkLookup::ById(created.id))
            .await
            .unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.name, name);
        assert_eq!(found.url, url);
    }
}

#[tokio::test]
async fn test_create_then_get_by_name_returns_input() {
    let service = service();

    let created = service
        .create_link(LinkInput::new("docs", "https://docs.rs"))
        .await
        .unwrap();

    let found = service
        .get_link(&LinkLookup::ByName("docs".to_string()))
        .await
        .unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_list_links_twice_returns_same_set() {
    let service = service();
    for (name, url) in [
        ("a", "https://a.example"),
        ("b", "https://b.example"),
        ("c", "https://c.example"),
    ] {
        service
            .create_link(LinkInput::new(name, url))
            .await
            .unwrap();
    }

    let mut first = service.list_links().await.unwrap();
    let mut second = service.list_links().await.unwrap();
    first.sort_by_key(|l| l.id);
    second.sort_by_key(|l| l.id);

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}
