//! Moderation policy

pub mod escalation;

pub use escalation::{evaluate, EscalationTrigger, AUTO_HIDE_FLAG_COUNT, TRUSTED_LEVEL};
