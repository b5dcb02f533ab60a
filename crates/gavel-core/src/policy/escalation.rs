//! Auto-escalation rule
//!
//! Decides whether a freshly flagged resource should be hidden pending
//! moderator review. Pure function of the flagger's trust level and the
//! cumulative flag count on the resource, so the rule is testable without a
//! database. The two triggers are independent and combined with OR semantics;
//! there is no de-escalation path here - only moderator resolution moves a
//! resource out of `under_review`.

use serde::Serialize;

/// Profile level at or above which a single flag escalates immediately
pub const TRUSTED_LEVEL: i32 = 20;

/// Flag count at or above which a resource escalates regardless of flagger
pub const AUTO_HIDE_FLAG_COUNT: i64 = 3;

/// Which rule fired, for structured logging and the moderation queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationTrigger {
    /// The flagger's level met [`TRUSTED_LEVEL`]
    TrustedFlagger,
    /// The resource's flag count met [`AUTO_HIDE_FLAG_COUNT`]
    FlagVolume,
}

/// Evaluate the escalation rule
///
/// `flag_count` includes the flag that was just recorded. Returns the trigger
/// that fired, preferring the trust trigger when both apply, or `None` when
/// the resource stays published.
#[must_use]
pub fn evaluate(flagger_level: i32, flag_count: i64) -> Option<EscalationTrigger> {
    if flagger_level >= TRUSTED_LEVEL {
        Some(EscalationTrigger::TrustedFlagger)
    } else if flag_count >= AUTO_HIDE_FLAG_COUNT {
        Some(EscalationTrigger::FlagVolume)
    } else {
        None
    }
}
