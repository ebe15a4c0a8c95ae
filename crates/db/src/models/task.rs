//! Internship task model and DTOs.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub internship_id: DbId,
    pub title: String,
    pub description: String,
    pub due_at: Option<Timestamp>,
    /// `None` means every participant of the internship.
    pub assigned_to: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task. The internship comes from the route path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_at: Option<Timestamp>,
    pub assigned_to: Option<DbId>,
}

/// DTO for partially updating a task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub due_at: Option<Option<Timestamp>>,
    /// `Some(None)` hands the task back to every participant.
    #[serde(default, deserialize_with = "super::nullable")]
    pub assigned_to: Option<Option<DbId>>,
}
