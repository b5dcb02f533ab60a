//! PostgreSQL repository implementations

pub mod content;
pub mod error;
pub mod flag;
pub mod profile;

pub use content::PgContentRepository;
pub use flag::PgFlagRepository;
pub use profile::PgProfileRepository;
