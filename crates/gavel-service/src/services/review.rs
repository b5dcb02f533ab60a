//! Review service
//!
//! The moderator side of the pipeline: reading the pending-flag queue and
//! applying a terminal disposition (keep, delete, ban) to flagged content.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use gavel_core::entities::Profile;
use gavel_core::value_objects::{ModerationStatus, ResolutionAction, ResourceKind};
use gavel_core::DomainError;

use crate::dto::{FlagResponse, PendingFlagsResponse, ResolutionResponse, ResolveFlagRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default and maximum page size for the moderation queue
const DEFAULT_QUEUE_LIMIT: i64 = 50;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List pending flags for the moderation queue, newest first
    #[instrument(skip(self))]
    pub async fn pending_flags(
        &self,
        moderator_id: Uuid,
        limit: Option<i64>,
    ) -> ServiceResult<PendingFlagsResponse> {
        self.require_admin(moderator_id).await?;

        let limit = limit.unwrap_or(DEFAULT_QUEUE_LIMIT);
        let flags = self.ctx.flag_repo().find_pending(limit).await?;

        Ok(PendingFlagsResponse {
            flags: flags.iter().map(FlagResponse::from).collect(),
        })
    }

    /// Apply a moderator's disposition to a flagged resource
    ///
    /// Authorization is re-read from the profiles table on every call rather
    /// than trusted from the token. Writes are sequential and not wrapped in a
    /// transaction; a failure part way leaves earlier writes in place and
    /// surfaces the error to the caller.
    #[instrument(skip(self, request))]
    pub async fn resolve_flag(
        &self,
        moderator_id: Uuid,
        request: ResolveFlagRequest,
    ) -> ServiceResult<ResolutionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let resource_id = Uuid::parse_str(&request.resource_id)
            .map_err(|_| ServiceError::validation("Invalid resource_id"))?;
        let resource_kind: ResourceKind = request.resource_type.parse().map_err(DomainError::from)?;
        let action: ResolutionAction = request.action.parse().map_err(DomainError::from)?;

        self.require_admin(moderator_id).await?;

        let new_status = match action {
            ResolutionAction::Keep => ModerationStatus::Published,
            ResolutionAction::Delete | ResolutionAction::Ban => ModerationStatus::Deleted,
        };

        self.ctx
            .content_repo()
            .set_status(resource_kind, resource_id, new_status)
            .await?;

        if action == ResolutionAction::Ban {
            let author_id = self
                .ctx
                .content_repo()
                .author_of(resource_kind, resource_id)
                .await?
                .ok_or(DomainError::ContentNotFound {
                    kind: resource_kind,
                    id: resource_id,
                })?;
            self.ctx.profile_repo().set_banned(author_id, true).await?;
            info!(author_id = %author_id, resource_id = %resource_id, "Author banned");
        }

        let resolved_flags = self.ctx.flag_repo().resolve_for_resource(resource_id).await?;

        info!(
            resource_id = %resource_id,
            kind = %resource_kind,
            action = %action,
            resolved_flags,
            "Flag resolved"
        );

        Ok(ResolutionResponse {
            resource_id: resource_id.to_string(),
            resource_type: resource_kind,
            action,
            moderation_status: new_status,
            resolved_flags,
        })
    }

    /// Load the moderator's profile and require the admin role
    ///
    /// A caller with no profile row gets the same rejection as a non-admin.
    async fn require_admin(&self, moderator_id: Uuid) -> ServiceResult<Profile> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(moderator_id)
            .await?
            .ok_or(DomainError::NotAdmin)?;
        if !profile.is_admin() {
            return Err(DomainError::NotAdmin.into());
        }
        Ok(profile)
    }
}
