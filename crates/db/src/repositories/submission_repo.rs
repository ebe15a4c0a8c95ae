//! Repository for the `submissions` table.

use launchpad_core::submission::STATUS_PENDING;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Feedback, Submission};

const COLUMNS: &str = "id, task_id, user_id, content, link_url, status, reviewed_by, \
                        reviewed_at, created_at, updated_at";

/// Provides storage for task submissions and their review.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a pending submission. A second pending submission for the same
    /// task and user violates `uq_submissions_task_user_pending`.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        user_id: DbId,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (task_id, user_id, content, link_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(task_id)
            .bind(user_id)
            .bind(&input.content)
            .bind(&input.link_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions WHERE task_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Record a review decision and, when `comment` is given, the matching
    /// feedback row, in one transaction.
    ///
    /// Returns `None` if the submission is no longer pending.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        decision: &str,
        reviewer_id: DbId,
        comment: Option<(&str, Option<i16>)>,
    ) -> Result<Option<(Submission, Option<Feedback>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE submissions SET status = $2, reviewed_by = $3, reviewed_at = NOW()
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        let Some(submission) = sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(decision)
            .bind(reviewer_id)
            .bind(STATUS_PENDING)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let feedback = match comment {
            Some((message, rating)) => Some(
                sqlx::query_as::<_, Feedback>(
                    "INSERT INTO feedback (submission_id, author_id, message, rating)
                     VALUES ($1, $2, $3, $4)
                     RETURNING id, submission_id, author_id, message, rating, created_at",
                )
                .bind(id)
                .bind(reviewer_id)
                .bind(message)
                .bind(rating)
                .fetch_one(&mut *tx)
                .await?,
            ),
            None => None,
        };

        tx.commit().await?;
        Ok(Some((submission, feedback)))
    }
}
