//! Repository for the `applications` table.
//!
//! The partial unique index `uq_applications_user_open` makes
//! [`ApplicationRepo::create`] fail with a unique violation when a
//! concurrent request already claimed the user's single open slot.

use launchpad_core::application::{ApplicationStatus, ExistingApplication};
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{Application, ApplicationSummary, CreateApplication};

const COLUMNS: &str = "id, user_id, internship_id, status, cover_letter, decided_by, \
                        created_at, updated_at";

const SUMMARY_SELECT: &str = "\
    SELECT a.id, a.user_id, u.username, a.internship_id, i.title AS internship_title, \
           a.status, a.created_at, a.updated_at \
    FROM applications a \
    JOIN users u ON u.id = a.user_id \
    JOIN internships i ON i.id = a.internship_id";

/// Provides storage for internship applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (user_id, internship_id, cover_letter)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.user_id)
            .bind(input.internship_id)
            .bind(&input.cover_letter)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The caller's applications as input for the apply rule.
    ///
    /// Rows whose status does not parse are skipped; the check constraint
    /// keeps that set empty in practice.
    pub async fn existing_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ExistingApplication>, sqlx::Error> {
        let rows: Vec<(DbId, String)> =
            sqlx::query_as("SELECT internship_id, status FROM applications WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(internship_id, status)| {
                status.parse::<ApplicationStatus>().ok().map(|status| {
                    ExistingApplication {
                        internship_id,
                        status,
                    }
                })
            })
            .collect())
    }

    /// All applications of one user, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ApplicationSummary>, sqlx::Error> {
        let query =
            format!("{SUMMARY_SELECT} WHERE a.user_id = $1 ORDER BY a.created_at DESC, a.id DESC");
        sqlx::query_as::<_, ApplicationSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All applications to one internship, oldest first (review order).
    pub async fn list_for_internship(
        pool: &PgPool,
        internship_id: DbId,
    ) -> Result<Vec<ApplicationSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.internship_id = $1 ORDER BY a.created_at ASC, a.id ASC"
        );
        sqlx::query_as::<_, ApplicationSummary>(&query)
            .bind(internship_id)
            .fetch_all(pool)
            .await
    }

    /// Move an application from `from` to `to`.
    ///
    /// The `status = from` guard turns a concurrent transition into a miss:
    /// returns `None` when the row no longer has the expected status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: ApplicationStatus,
        to: ApplicationStatus,
        decided_by: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET status = $3, decided_by = $4
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .bind(decided_by)
            .fetch_optional(pool)
            .await
    }

    /// Whether the user holds an `accepted` or `active` application to the
    /// internship.
    pub async fn is_participant(
        pool: &PgPool,
        user_id: DbId,
        internship_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM applications
                WHERE user_id = $1 AND internship_id = $2
                  AND status IN ('accepted', 'active')
             )",
        )
        .bind(user_id)
        .bind(internship_id)
        .fetch_one(pool)
        .await
    }
}
