//! Flag service
//!
//! Handles flag submission and automatic escalation of heavily-flagged or
//! trusted-flagger reported content.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use gavel_core::entities::Flag;
use gavel_core::policy::{self, EscalationTrigger};
use gavel_core::value_objects::{ModerationStatus, ResourceKind};
use gavel_core::DomainError;

use crate::dto::{FlagContentRequest, FlagResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Flag service
pub struct FlagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FlagService<'a> {
    /// Create a new FlagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a flag against a resource and escalate it when warranted
    ///
    /// Escalation moves the resource to `under_review` when the flagger is a
    /// trusted member or when the flag count reaches the auto-hide threshold.
    /// A failed escalation write does not fail the submission; the flag row is
    /// already committed and the next flag retries the escalation.
    #[instrument(skip(self, request))]
    pub async fn flag_content(
        &self,
        flagger_id: Uuid,
        request: FlagContentRequest,
    ) -> ServiceResult<FlagResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let resource_id = Uuid::parse_str(&request.resource_id)
            .map_err(|_| ServiceError::validation("Invalid resource_id"))?;
        let resource_kind: ResourceKind = request.resource_type.parse().map_err(DomainError::from)?;

        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(DomainError::EmptyReason.into());
        }

        let flagger = self
            .ctx
            .profile_repo()
            .find_by_id(flagger_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(flagger_id))?;
        if flagger.banned {
            return Err(DomainError::FlaggerBanned.into());
        }

        // The resource must exist before a flag may reference it
        self.ctx
            .content_repo()
            .status_of(resource_kind, resource_id)
            .await?
            .ok_or(DomainError::ContentNotFound {
                kind: resource_kind,
                id: resource_id,
            })?;

        let flag = Flag::new(flagger_id, resource_id, resource_kind, reason.to_string());
        self.ctx.flag_repo().create(&flag).await?;

        let flag_count = self.ctx.flag_repo().count_for_resource(resource_id).await?;

        if let Some(trigger) = policy::evaluate(flagger.level, flag_count) {
            match self
                .ctx
                .content_repo()
                .set_status(resource_kind, resource_id, ModerationStatus::UnderReview)
                .await
            {
                Ok(()) => {
                    let trigger_name = match trigger {
                        EscalationTrigger::TrustedFlagger => "trusted_flagger",
                        EscalationTrigger::FlagVolume => "flag_volume",
                    };
                    info!(
                        resource_id = %resource_id,
                        kind = %resource_kind,
                        trigger = trigger_name,
                        flag_count,
                        "Content escalated to review"
                    );
                }
                Err(e) => {
                    warn!(
                        resource_id = %resource_id,
                        kind = %resource_kind,
                        error = %e,
                        "Escalation update failed; flag recorded without status change"
                    );
                }
            }
        }

        info!(flag_id = %flag.id, resource_id = %resource_id, "Flag recorded");

        Ok(FlagResponse::from(flag))
    }
}
