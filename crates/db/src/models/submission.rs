//! Task submission and reviewer feedback models.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub link_url: Option<String>,
    pub status: String,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /tasks/{id}/submissions`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmission {
    #[serde(default)]
    pub content: String,
    pub link_url: Option<String>,
}

/// Request body for `POST /submissions/{id}/review`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSubmission {
    pub decision: String,
    /// Optional reviewer comment, stored as feedback.
    pub comment: Option<String>,
    pub rating: Option<i16>,
}

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub submission_id: DbId,
    pub author_id: Option<DbId>,
    pub message: String,
    pub rating: Option<i16>,
    pub created_at: Timestamp,
}

/// Request body for `POST /submissions/{id}/feedback`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedback {
    pub message: String,
    pub rating: Option<i16>,
}
