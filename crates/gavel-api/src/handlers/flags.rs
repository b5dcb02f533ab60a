//! Flag handlers
//!
//! Endpoints for flag submission.

use axum::{extract::State, Json};
use gavel_service::{FlagContentRequest, FlagResponse, FlagService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a flag against a resource
///
/// POST /flags
pub async fn create_flag(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<FlagContentRequest>,
) -> ApiResult<Created<Json<FlagResponse>>> {
    let service = FlagService::new(state.service_context());
    let response = service.flag_content(auth.profile_id, request).await?;
    Ok(Created(Json(response)))
}
