//! Service context - dependency container for services
//!
//! Holds the repositories and shared services the moderation pipeline needs.

use std::sync::Arc;

use gavel_common::auth::JwtService;
use gavel_core::traits::{ContentRepository, FlagRepository, ProfileRepository};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories (flags, moderatable content, profiles)
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    flag_repo: Arc<dyn FlagRepository>,
    content_repo: Arc<dyn ContentRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        flag_repo: Arc<dyn FlagRepository>,
        content_repo: Arc<dyn ContentRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            flag_repo,
            content_repo,
            profile_repo,
            jwt_service,
        }
    }

    /// Get the flag repository
    pub fn flag_repo(&self) -> &dyn FlagRepository {
        self.flag_repo.as_ref()
    }

    /// Get the content repository
    pub fn content_repo(&self) -> &dyn ContentRepository {
        self.content_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    flag_repo: Option<Arc<dyn FlagRepository>>,
    content_repo: Option<Arc<dyn ContentRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            flag_repo: None,
            content_repo: None,
            profile_repo: None,
            jwt_service: None,
        }
    }

    pub fn flag_repo(mut self, repo: Arc<dyn FlagRepository>) -> Self {
        self.flag_repo = Some(repo);
        self
    }

    pub fn content_repo(mut self, repo: Arc<dyn ContentRepository>) -> Self {
        self.content_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.flag_repo
                .ok_or_else(|| super::error::ServiceError::validation("flag_repo is required"))?,
            self.content_repo
                .ok_or_else(|| super::error::ServiceError::validation("content_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| super::error::ServiceError::validation("profile_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
