//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use gavel_core::entities::Flag;
use gavel_core::value_objects::{FlagStatus, ModerationStatus, ResolutionAction, ResourceKind};

// ============================================================================
// Flag Responses
// ============================================================================

/// A flag as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct FlagResponse {
    pub id: String,
    pub flagger_id: String,
    pub resource_id: String,
    pub resource_type: ResourceKind,
    pub reason: String,
    pub status: FlagStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Flag> for FlagResponse {
    fn from(flag: &Flag) -> Self {
        Self {
            id: flag.id.to_string(),
            flagger_id: flag.flagger_id.to_string(),
            resource_id: flag.resource_id.to_string(),
            resource_type: flag.resource_kind,
            reason: flag.reason.clone(),
            status: flag.status,
            created_at: flag.created_at,
        }
    }
}

impl From<Flag> for FlagResponse {
    fn from(flag: Flag) -> Self {
        Self::from(&flag)
    }
}

/// The moderation queue
#[derive(Debug, Serialize)]
pub struct PendingFlagsResponse {
    pub flags: Vec<FlagResponse>,
}

/// Result of a moderator resolution
#[derive(Debug, Serialize)]
pub struct ResolutionResponse {
    pub resource_id: String,
    pub resource_type: ResourceKind,
    pub action: ResolutionAction,
    /// Moderation status the resource was left in
    pub moderation_status: ModerationStatus,
    /// How many flags were moved to `resolved`
    pub resolved_flags: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
