//! Value objects - closed enums for moderation state

pub mod moderation;

pub use moderation::{
    FlagStatus, ModerationStatus, ParseKindError, ResolutionAction, ResourceKind, Role,
};
