//! Repository for the `feedback` table.

use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateFeedback, Feedback};

const COLUMNS: &str = "id, submission_id, author_id, message, rating, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    pub async fn create(
        pool: &PgPool,
        submission_id: DbId,
        author_id: DbId,
        input: &CreateFeedback,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (submission_id, author_id, message, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(submission_id)
            .bind(author_id)
            .bind(input.message.trim())
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Feedback for one submission in the order it was written.
    pub async fn list_for_submission(
        pool: &PgPool,
        submission_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback WHERE submission_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(submission_id)
            .fetch_all(pool)
            .await
    }
}
