//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns that a patch may clear are `Option<Option<T>>` with
//! [`nullable`]: absent keeps the value, `null` clears it.

use serde::{Deserialize, Deserializer};

pub mod application;
pub mod internship;
pub mod portfolio;
pub mod role;
pub mod session;
pub mod submission;
pub mod task;
pub mod theme;
pub mod user;

/// Deserialize a present field (including `null`) as `Some(inner)`.
///
/// Pair with `#[serde(default)]` so a missing field stays `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
