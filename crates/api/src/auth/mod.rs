//! Credentials and session tokens.
//!
//! - [`password`] hashes and verifies passwords with Argon2id.
//! - [`jwt`] issues and validates access tokens and hashes refresh tokens.
//! - [`cookie`] carries the access token in an HttpOnly cookie.

pub mod cookie;
pub mod jwt;
pub mod password;
