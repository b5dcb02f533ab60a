//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Flag, Profile};
use crate::error::DomainError;
use crate::value_objects::{ModerationStatus, ResourceKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Flag Repository
// ============================================================================

#[async_trait]
pub trait FlagRepository: Send + Sync {
    /// Insert a new flag
    ///
    /// A unique constraint on (flagger, resource) makes a second flag from the
    /// same user fail with [`DomainError::AlreadyFlagged`].
    async fn create(&self, flag: &Flag) -> RepoResult<()>;

    /// Count all flags ever recorded against a resource
    async fn count_for_resource(&self, resource_id: Uuid) -> RepoResult<i64>;

    /// Mark every flag on a resource as resolved, returning how many changed
    async fn resolve_for_resource(&self, resource_id: Uuid) -> RepoResult<u64>;

    /// List pending flags, newest first
    async fn find_pending(&self, limit: i64) -> RepoResult<Vec<Flag>>;
}

// ============================================================================
// Content Repository
// ============================================================================

/// Access to the moderatable resources (chat messages, questions, answers)
///
/// Which table a call touches is decided by the [`ResourceKind`] enum; the
/// implementation dispatches with an exhaustive match.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Read the moderation status of a resource, or None if it does not exist
    async fn status_of(&self, kind: ResourceKind, id: Uuid) -> RepoResult<Option<ModerationStatus>>;

    /// Set the moderation status of a resource
    async fn set_status(&self, kind: ResourceKind, id: Uuid, status: ModerationStatus) -> RepoResult<()>;

    /// Look up the author of a resource
    async fn author_of(&self, kind: ResourceKind, id: Uuid) -> RepoResult<Option<Uuid>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Set the banned flag on a profile
    async fn set_banned(&self, id: Uuid, banned: bool) -> RepoResult<()>;
}
