//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::{ParseKindError, ResourceKind};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Content not found: {kind} {id}")]
    ContentNotFound { kind: ResourceKind, id: Uuid },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),

    #[error("Reason must not be empty")]
    EmptyReason,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Unauthorized: Not an Admin")]
    NotAdmin,

    /// An authenticated token whose subject has no profile row cannot act
    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Banned users cannot submit flags")]
    FlaggerBanned,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already flagged this content")]
    AlreadyFlagged,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::ContentNotFound { .. } => "UNKNOWN_CONTENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownKind(e) => match e.kind {
                "resolution action" => "UNKNOWN_ACTION",
                _ => "UNKNOWN_RESOURCE_TYPE",
            },
            Self::EmptyReason => "EMPTY_REASON",
            Self::NotAdmin => "NOT_ADMIN",
            Self::FlaggerBanned => "FLAGGER_BANNED",
            Self::AlreadyFlagged => "ALREADY_FLAGGED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::UnknownKind(_) | Self::EmptyReason
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAdmin | Self::ProfileNotFound(_) | Self::FlaggerBanned
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyFlagged)
    }
}
