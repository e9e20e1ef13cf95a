//! Domain core for the Bandroom curriculum CMS.
//!
//! Holds the entity records (courses, units, skills, lessons), the error
//! taxonomy shared by every layer, the persistence gateway contracts and the
//! entity services that enforce creation/update invariants before a record
//! reaches storage. Nothing in this crate performs I/O directly.

pub mod env;
pub mod error;
pub mod models;
pub mod roles;
pub mod services;
pub mod slug;
pub mod store;
pub mod types;
