//! Well-known role name constants.
//!
//! Roles arrive as the `role` claim of the bearer token issued by the
//! upstream identity service.

/// The only role allowed to call the content-management routes.
pub const ROLE_ADMIN: &str = "admin";
