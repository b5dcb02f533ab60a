//! PostgreSQL implementation of FlagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gavel_core::entities::Flag;
use gavel_core::error::DomainError;
use gavel_core::traits::{FlagRepository, RepoResult};
use gavel_core::value_objects::FlagStatus;

use crate::models::FlagModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FlagRepository
#[derive(Clone)]
pub struct PgFlagRepository {
    pool: PgPool,
}

impl PgFlagRepository {
    /// Create a new PgFlagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlagRepository for PgFlagRepository {
    #[instrument(skip(self, flag), fields(flag_id = %flag.id, resource_id = %flag.resource_id))]
    async fn create(&self, flag: &Flag) -> RepoResult<()> {
        // The unique constraint on (flagger_id, resource_id) is the duplicate
        // check; a concurrent second submission loses the race here instead of
        // slipping past a prior read.
        sqlx::query(
            r"
            INSERT INTO flags (id, flagger_id, resource_id, resource_type, reason, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(flag.id)
        .bind(flag.flagger_id)
        .bind(flag.resource_id)
        .bind(flag.resource_kind.as_str())
        .bind(&flag.reason)
        .bind(flag.status.as_str())
        .bind(flag.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFlagged))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_for_resource(&self, resource_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM flags WHERE resource_id = $1
            ",
        )
        .bind(resource_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn resolve_for_resource(&self, resource_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE flags SET status = $2 WHERE resource_id = $1 AND status = $3
            ",
        )
        .bind(resource_id)
        .bind(FlagStatus::Resolved.as_str())
        .bind(FlagStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_pending(&self, limit: i64) -> RepoResult<Vec<Flag>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, FlagModel>(
            r"
            SELECT id, flagger_id, resource_id, resource_type, reason, status, created_at
            FROM flags
            WHERE status = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(FlagStatus::Pending.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Flag::try_from).collect()
    }
}
