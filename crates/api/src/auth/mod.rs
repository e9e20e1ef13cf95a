//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and generation, used by tests
//!   and tooling; tokens are normally issued by the identity service).

pub mod jwt;
