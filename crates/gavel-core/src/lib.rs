//! # gavel-core
//!
//! Domain layer containing entities, value objects, the escalation policy,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Flag, Profile};
pub use error::DomainError;
pub use policy::{EscalationTrigger, AUTO_HIDE_FLAG_COUNT, TRUSTED_LEVEL};
pub use traits::{ContentRepository, FlagRepository, ProfileRepository, RepoResult};
pub use value_objects::{
    FlagStatus, ModerationStatus, ParseKindError, ResolutionAction, ResourceKind, Role,
};
