//! # gavel-service
//!
//! Application layer: the flag ingestion / escalation pipeline and the
//! moderator review actions, plus the DTOs they speak.

pub mod dto;
pub mod services;

// Re-export the public surface for handler crates
pub use dto::{
    FlagContentRequest, FlagResponse, HealthResponse, PendingFlagsResponse, ReadinessResponse,
    ResolutionResponse, ResolveFlagRequest,
};
pub use services::{
    FlagService, ReviewService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
