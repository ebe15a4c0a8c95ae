//! Request extractors for authentication and role checks.
//!
//! - [`auth::AuthUser`] resolves the caller from a Bearer token or the
//!   `access_token` cookie.
//! - [`rbac::RequireAdmin`] additionally demands the `admin` role.
//! - [`rbac::RequireAuth`] accepts any signed-in user.

pub mod auth;
pub mod rbac;
