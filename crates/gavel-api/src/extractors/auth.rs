//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated profile extracted from JWT token
///
/// Carries only the profile ID; role and ban state are re-read from the
/// database by the services so stale tokens cannot keep privileges.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Profile ID from the JWT token
    pub profile_id: Uuid,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(profile_id: Uuid) -> Self {
        Self { profile_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract profile ID from claims
        let profile_id = claims.profile_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid profile ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(profile_id))
    }
}
