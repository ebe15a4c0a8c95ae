//! Internship listing model and DTOs.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `internships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Internship {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub duration_weeks: i32,
    pub stipend: Option<i64>,
    pub skills: Vec<String>,
    pub status: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an internship. `status` defaults to `open`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInternship {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: Option<String>,
    pub duration_weeks: i32,
    pub stipend: Option<i64>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: Option<String>,
}

/// DTO for partially updating an internship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInternship {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration_weeks: Option<i32>,
    pub stipend: Option<i64>,
    pub skills: Option<Vec<String>>,
    pub status: Option<String>,
}
