//! Portfolio theme model and DTOs.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `themes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub tokens: serde_json::Value,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a theme.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTheme {
    pub name: String,
    pub description: Option<String>,
    pub tokens: serde_json::Value,
}

/// DTO for partially updating a theme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTheme {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tokens: Option<serde_json::Value>,
}
