//! Database models with SQLx FromRow derives

pub mod flag;
pub mod profile;

pub use flag::FlagModel;
pub use profile::ProfileModel;
