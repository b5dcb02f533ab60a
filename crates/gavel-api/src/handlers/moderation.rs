//! Moderation handlers
//!
//! Endpoints for the moderator queue and flag resolution. Authorization is
//! enforced in the service layer against the caller's stored role.

use axum::{extract::State, Json};
use gavel_service::{
    PendingFlagsResponse, ResolutionResponse, ResolveFlagRequest, ReviewService,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List pending flags, newest first
///
/// GET /moderation/flags
pub async fn get_pending_flags(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PendingFlagsResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service
        .pending_flags(auth.profile_id, Some(pagination.limit))
        .await?;
    Ok(Json(response))
}

/// Apply a resolution to a flagged resource
///
/// POST /moderation/resolutions
pub async fn resolve_flag(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ResolveFlagRequest>,
) -> ApiResult<Json<ResolutionResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service.resolve_flag(auth.profile_id, request).await?;
    Ok(Json(response))
}
