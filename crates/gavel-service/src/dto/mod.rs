//! Request and response DTOs

pub mod requests;
pub mod responses;

pub use requests::{FlagContentRequest, ResolveFlagRequest};
pub use responses::{
    FlagResponse, HealthResponse, PendingFlagsResponse, ReadinessResponse, ResolutionResponse,
};
