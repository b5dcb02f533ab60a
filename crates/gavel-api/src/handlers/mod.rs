//! Request handlers
//!
//! HTTP handlers organized by resource.

pub mod flags;
pub mod health;
pub mod moderation;
