//! Flag entity - one user's assertion that a resource violates policy

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{FlagStatus, ResourceKind};

/// Flag entity
///
/// At most one flag exists per (flagger, resource) pair, enforced by a unique
/// constraint in the database layer. Flags are never deleted; resolution moves
/// them from `pending` to `resolved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub id: Uuid,
    pub flagger_id: Uuid,
    pub resource_id: Uuid,
    pub resource_kind: ResourceKind,
    pub reason: String,
    pub status: FlagStatus,
    pub created_at: DateTime<Utc>,
}

impl Flag {
    /// Create a new pending Flag
    pub fn new(flagger_id: Uuid, resource_id: Uuid, resource_kind: ResourceKind, reason: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            flagger_id,
            resource_id,
            resource_kind,
            reason,
            status: FlagStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Check if the flag is still awaiting moderator review
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == FlagStatus::Pending
    }

    /// Mark the flag as resolved
    pub fn resolve(&mut self) {
        self.status = FlagStatus::Resolved;
    }
}
