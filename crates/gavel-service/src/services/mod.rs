//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, authorization, and orchestration of the moderation pipeline.

pub mod context;
pub mod error;
pub mod flag;
pub mod review;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use flag::FlagService;
pub use review::ReviewService;
