#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

use named_links::domain::entities::{Link, LinkInput};
use named_links::domain::repositories::{LinkRepository, RepositoryError};
use named_links::infrastructure::persistence::InMemoryLinkRepository;
use named_links::routes::app_router;
use named_links::state::AppState;

pub fn memory_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()))
}

pub fn memory_server() -> TestServer {
    TestServer::new(app_router(memory_state())).unwrap()
}

pub fn failing_server() -> TestServer {
    TestServer::new(app_router(AppState::new(Arc::new(FailingRepository)))).unwrap()
}

/// Creates a link through the API and returns the response body.
pub async fn create_link(server: &TestServer, name: &str, url: &str) -> Value {
    let response = server
        .post("/links")
        .json(&json!({ "name": name, "url": url }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Store whose every call fails as if the database were down.
pub struct FailingRepository;

fn down() -> RepositoryError {
    RepositoryError::unavailable("connection refused")
}

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Link>, RepositoryError> {
        Err(down())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Link>, RepositoryError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Link>, RepositoryError> {
        Err(down())
    }

    async fn insert(&self, _input: LinkInput) -> Result<Link, RepositoryError> {
        Err(down())
    }

    async fn update(&self, _id: Uuid, _input: LinkInput) -> Result<Link, RepositoryError> {
        Err(down())
    }

    async fn delete(&self, _id: Uuid) -> Result<u64, RepositoryError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(down())
    }
}
