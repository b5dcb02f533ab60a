//! Profile entity - the acting user as the moderation pipeline sees them

use uuid::Uuid;

use crate::policy::TRUSTED_LEVEL;
use crate::value_objects::Role;

/// Profile entity
///
/// Only the fields the moderation pipeline reads: role gates moderator
/// actions, level feeds the escalation rule, banned gates flag submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub level: i32,
    pub banned: bool,
}

impl Profile {
    /// Create a new member-level Profile
    pub fn new(id: Uuid, username: String) -> Self {
        Self {
            id,
            username,
            role: Role::Member,
            level: 0,
            banned: false,
        }
    }

    /// Check if the profile holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check if the profile's level grants unilateral escalation power
    #[inline]
    pub fn is_trusted(&self) -> bool {
        self.level >= TRUSTED_LEVEL
    }
}
