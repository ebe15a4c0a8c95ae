//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_INTERN: &str = "intern";

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = ROLE_INTERN;
