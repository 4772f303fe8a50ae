//! PostgreSQL implementation of the link repository.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use uuid::Uuid;

use super::pg_error::{classify_write, is_transient};
use crate::domain::entities::{Link, LinkInput};
use crate::domain::repositories::{LinkRepository, RepositoryError};

/// Upper bound for a single backoff delay.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Retry settings for idempotent reads.
///
/// Writes are never retried: a replayed insert cannot tell its own earlier
/// success from a name conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt. `0` disables retrying.
    pub attempts: usize,
    /// Delay before the first retry; later delays double.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_millis(50),
        }
    }
}

impl RetryPolicy {
    /// Backoff delays, jittered and capped.
    fn delays(self) -> impl Iterator<Item = Duration> + Send {
        // ExponentialBackoff yields 2^n * factor, so factor = base / 2 starts at `base_delay`.
        let factor = (self.base_delay.as_millis() as u64 / 2).max(1);

        ExponentialBackoff::from_millis(2)
            .factor(factor)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.attempts)
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    name: String,
    url: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.name, row.url)
    }
}

/// PostgreSQL repository for links.
///
/// Name uniqueness is enforced by the `links_name_key` constraint, so the
/// check and the write happen atomically inside PostgreSQL.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
    retry: RetryPolicy,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            retry: RetryPolicy::default(),
        }
    }

    /// Overrides the retry policy for reads.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Runs a read query, retrying transient failures.
    async fn read<T, F, Fut>(&self, query: F) -> Result<T, RepositoryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, sqlx::Error>>,
    {
        RetryIf::spawn(self.retry.delays(), query, is_transient)
            .await
            .map_err(RepositoryError::unavailable)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_all(&self) -> Result<Vec<Link>, RepositoryError> {
        let rows = self
            .read(|| {
                sqlx::query_as::<_, LinkRow>("SELECT id, name, url FROM links")
                    .fetch_all(self.pool.as_ref())
            })
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, RepositoryError> {
        let row = self
            .read(|| {
                sqlx::query_as::<_, LinkRow>("SELECT id, name, url FROM links WHERE name = $1")
                    .bind(name)
                    .fetch_optional(self.pool.as_ref())
            })
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Link>, RepositoryError> {
        let row = self
            .read(|| {
                sqlx::query_as::<_, LinkRow>("SELECT id, name, url FROM links WHERE id = $1")
                    .bind(id)
                    .fetch_optional(self.pool.as_ref())
            })
            .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, input: LinkInput) -> Result<Link, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (name, url)
            VALUES ($1, $2)
            RETURNING id, name, url
            "#,
        )
        .bind(&input.name)
        .bind(&input.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_write(e, &input.name))?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, input: LinkInput) -> Result<Link, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET name = $2, url = $3
            WHERE id = $1
            RETURNING id, name, url
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| classify_write(e, &input.name))?;

        row.map(Link::from).ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(RepositoryError::unavailable)?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.read(|| sqlx::query("SELECT 1").execute(self.pool.as_ref()))
            .await?;

        Ok(())
    }
}
