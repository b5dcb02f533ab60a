//! Moderation value objects
//!
//! Closed enums for everything the flag pipeline tags rows with: the kind of
//! flaggable resource, the resource's moderation status, the flag lifecycle
//! status, the moderator's disposition, and profile roles. Each has a stable
//! wire/database string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a wire tag does not name a known enum variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKindError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Kind of community content that can be flagged
///
/// The set is closed: table dispatch in the database layer is an exhaustive
/// match over this enum, so an invalid table name cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[serde(rename = "chat")]
    ChatMessage,
    Question,
    Answer,
}

impl ResourceKind {
    /// Wire tag used in requests and stored in the flags table
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChatMessage => "chat",
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }

    /// All kinds, for iteration in tests and admin tooling
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::ChatMessage, Self::Question, Self::Answer]
    }
}

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Self::ChatMessage),
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            other => Err(ParseKindError::new("resource type", other)),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation status carried by every flaggable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Published,
    UnderReview,
    Deleted,
}

impl ModerationStatus {
    /// Database string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::UnderReview => "under_review",
            Self::Deleted => "deleted",
        }
    }

    /// Check if the resource is visible to regular users
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for ModerationStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(Self::Published),
            "under_review" => Ok(Self::UnderReview),
            "deleted" => Ok(Self::Deleted),
            other => Err(ParseKindError::new("moderation status", other)),
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag lifecycle status
///
/// Flags move `pending` -> `resolved` and are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlagStatus {
    #[default]
    Pending,
    Resolved,
}

impl FlagStatus {
    /// Database string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }
}

impl FromStr for FlagStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            other => Err(ParseKindError::new("flag status", other)),
        }
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal disposition applied by a moderator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionAction {
    /// Restore the resource to `published`
    Keep,
    /// Soft-delete the resource
    Delete,
    /// Soft-delete the resource and ban its author
    Ban,
}

impl ResolutionAction {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Delete => "delete",
            Self::Ban => "ban",
        }
    }
}

impl FromStr for ResolutionAction {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Self::Keep),
            "delete" => Ok(Self::Delete),
            "ban" => Ok(Self::Ban),
            other => Err(ParseKindError::new("resolution action", other)),
        }
    }
}

impl fmt::Display for ResolutionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(ParseKindError::new("role", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
