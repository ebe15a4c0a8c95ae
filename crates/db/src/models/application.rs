//! Internship application model and DTOs.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub user_id: DbId,
    pub internship_id: DbId,
    pub status: String,
    pub cover_letter: Option<String>,
    pub decided_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application joined with its internship title and applicant name,
/// used by list endpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationSummary {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub internship_id: DbId,
    pub internship_title: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an application. Status always starts at `applied`.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub user_id: DbId,
    pub internship_id: DbId,
    pub cover_letter: Option<String>,
}

/// Request body for `POST /internships/{id}/apply`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyRequest {
    pub cover_letter: Option<String>,
}

/// Request body for `PUT /applications/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: String,
}
