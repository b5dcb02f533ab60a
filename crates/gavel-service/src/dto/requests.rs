//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Identifier and tag fields arrive as strings from the form
//! layer; the services parse them into domain types.

use serde::Deserialize;
use validator::Validate;

/// Flag submission request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlagContentRequest {
    /// UUID of the resource being flagged
    #[validate(length(min = 1, message = "resource_id is required"))]
    pub resource_id: String,

    /// One of `chat`, `question`, `answer`
    #[validate(length(min = 1, message = "resource_type is required"))]
    pub resource_type: String,

    #[validate(length(min = 1, max = 1000, message = "Reason must be 1-1000 characters"))]
    pub reason: String,
}

/// Moderator resolution request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResolveFlagRequest {
    /// UUID of the flagged resource
    #[validate(length(min = 1, message = "resource_id is required"))]
    pub resource_id: String,

    /// One of `chat`, `question`, `answer`
    #[validate(length(min = 1, message = "resource_type is required"))]
    pub resource_type: String,

    /// One of `keep`, `delete`, `ban`
    #[validate(length(min = 1, message = "action is required"))]
    pub action: String,
}
