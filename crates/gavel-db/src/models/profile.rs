//! Profile database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub level: i32,
    pub banned: bool,
}
