//! Domain layer shared by the storage and service crates.
//!
//! Deliberately free of internal dependencies so that repositories, services,
//! and any future API layer can all reference the same id types, error
//! taxonomy, permission codenames, and visibility rules.

pub mod error;
pub mod permissions;
pub mod types;
pub mod visibility;
