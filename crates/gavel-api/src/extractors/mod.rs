//! Request extractors
//!
//! Custom Axum extractors for authentication, validation, and query parsing.

pub mod auth;
pub mod pagination;
pub mod validated;

pub use auth::AuthUser;
pub use pagination::Pagination;
pub use validated::ValidatedJson;
