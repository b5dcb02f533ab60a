//! PostgreSQL implementation of ContentRepository
//!
//! One repository serves all three content tables. The table name is chosen
//! by an exhaustive match over `ResourceKind`, so the query text can only
//! ever name a real table.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gavel_core::error::DomainError;
use gavel_core::traits::{ContentRepository, RepoResult};
use gavel_core::value_objects::{ModerationStatus, ResourceKind};

use super::error::{content_not_found, map_db_error};

/// Table backing each resource kind
fn table(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::ChatMessage => "chat_messages",
        ResourceKind::Question => "questions",
        ResourceKind::Answer => "answers",
    }
}

/// PostgreSQL implementation of ContentRepository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    /// Create a new PgContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    #[instrument(skip(self))]
    async fn status_of(&self, kind: ResourceKind, id: Uuid) -> RepoResult<Option<ModerationStatus>> {
        let query = format!("SELECT moderation_status FROM {} WHERE id = $1", table(kind));

        let status = sqlx::query_scalar::<_, String>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        status
            .map(|s| {
                s.parse::<ModerationStatus>()
                    .map_err(|e| DomainError::DatabaseError(format!("Corrupt {kind} row: {e}")))
            })
            .transpose()
    }

    #[instrument(skip(self))]
    async fn set_status(&self, kind: ResourceKind, id: Uuid, status: ModerationStatus) -> RepoResult<()> {
        let query = format!("UPDATE {} SET moderation_status = $2 WHERE id = $1", table(kind));

        let result = sqlx::query(&query)
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(content_not_found(kind, id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn author_of(&self, kind: ResourceKind, id: Uuid) -> RepoResult<Option<Uuid>> {
        let query = format!("SELECT author_id FROM {} WHERE id = $1", table(kind));

        let author = sqlx::query_scalar::<_, Uuid>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(author)
    }
}
