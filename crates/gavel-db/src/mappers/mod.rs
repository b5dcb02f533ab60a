//! Model ↔ Entity mappers
//!
//! Stored enum columns are plain text; conversion to domain entities is
//! fallible, so these are `TryFrom` impls. An unparseable stored value is
//! reported as a database error rather than a panic.

pub mod flag;
pub mod profile;
