//! Flag database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the flags table
///
/// Enum-valued columns are stored as text and parsed in the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct FlagModel {
    pub id: Uuid,
    pub flagger_id: Uuid,
    pub resource_id: Uuid,
    pub resource_type: String,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
