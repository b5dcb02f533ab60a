//! Test fixtures and data seeding
//!
//! Provides request builders, response shapes, and helpers that seed
//! profiles and content rows directly through the database pool.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use gavel_db::{create_pool_from_env, PgPool};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Connect a seeding pool from DATABASE_URL
pub async fn seed_pool() -> Result<PgPool> {
    Ok(create_pool_from_env().await?)
}

// ============================================================================
// Request / response shapes
// ============================================================================

/// Flag submission request body
#[derive(Debug, Serialize)]
pub struct FlagRequest {
    pub resource_id: String,
    pub resource_type: String,
    pub reason: String,
}

impl FlagRequest {
    pub fn new(resource_id: Uuid, resource_type: &str, reason: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            resource_type: resource_type.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Resolution request body
#[derive(Debug, Serialize)]
pub struct ResolveRequest {
    pub resource_id: String,
    pub resource_type: String,
    pub action: String,
}

impl ResolveRequest {
    pub fn new(resource_id: Uuid, resource_type: &str, action: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            resource_type: resource_type.to_string(),
            action: action.to_string(),
        }
    }
}

/// Flag as returned by the API
#[derive(Debug, Deserialize)]
pub struct FlagBody {
    pub id: String,
    pub flagger_id: String,
    pub resource_id: String,
    pub resource_type: String,
    pub reason: String,
    pub status: String,
}

/// Moderation queue response
#[derive(Debug, Deserialize)]
pub struct PendingFlagsBody {
    pub flags: Vec<FlagBody>,
}

/// Resolution response
#[derive(Debug, Deserialize)]
pub struct ResolutionBody {
    pub resource_id: String,
    pub resource_type: String,
    pub action: String,
    pub moderation_status: String,
    pub resolved_flags: u64,
}

// ============================================================================
// Database seeding
// ============================================================================

/// Insert a profile and return its ID
pub async fn seed_profile(pool: &PgPool, role: &str, level: i32, banned: bool) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let username = format!("testuser{}", unique_suffix());
    sqlx::query(
        "INSERT INTO profiles (id, username, role, level, banned) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(username)
    .bind(role)
    .bind(level)
    .bind(banned)
    .execute(pool)
    .await?;
    Ok(id)
}

/// Insert a published question and return its ID
pub async fn seed_question(pool: &PgPool, author_id: Uuid) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let suffix = unique_suffix();
    sqlx::query(
        "INSERT INTO questions (id, author_id, title, body) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(author_id)
    .bind(format!("Question {suffix}"))
    .bind("How do I test this?")
    .execute(pool)
    .await?;
    Ok(id)
}

/// Insert a published chat message and return its ID
pub async fn seed_chat_message(pool: &PgPool, author_id: Uuid) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO chat_messages (id, author_id, body) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(author_id)
        .bind("hello")
        .execute(pool)
        .await?;
    Ok(id)
}

/// Read the moderation status of a question
pub async fn question_status(pool: &PgPool, id: Uuid) -> Result<String> {
    let status: String =
        sqlx::query_scalar("SELECT moderation_status FROM questions WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
    Ok(status)
}

/// Read the banned flag of a profile
pub async fn profile_banned(pool: &PgPool, id: Uuid) -> Result<bool> {
    let banned: bool = sqlx::query_scalar("SELECT banned FROM profiles WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(banned)
}
