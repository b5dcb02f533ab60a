//! Domain entities

pub mod flag;
pub mod profile;

pub use flag::Flag;
pub use profile::Profile;
