//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireEditor`] -- Requires the `editor` or `admin` role (catalog edits).
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role (user management).

pub mod auth;
pub mod rbac;
