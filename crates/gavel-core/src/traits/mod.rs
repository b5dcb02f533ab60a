//! Repository traits (ports)

pub mod repositories;

pub use repositories::{ContentRepository, FlagRepository, ProfileRepository, RepoResult};
