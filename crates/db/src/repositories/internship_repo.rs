//! Repository for the `internships` table.

use launchpad_core::internship::STATUS_OPEN;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::internship::{CreateInternship, Internship, UpdateInternship};

const COLUMNS: &str = "id, title, description, location, duration_weeks, stipend, skills, \
                        status, created_by, created_at, updated_at";

/// Provides CRUD operations for internship listings.
pub struct InternshipRepo;

impl InternshipRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternship,
        created_by: DbId,
    ) -> Result<Internship, sqlx::Error> {
        let query = format!(
            "INSERT INTO internships
                (title, description, location, duration_weeks, stipend, skills, status, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Internship>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.duration_weeks)
            .bind(input.stipend)
            .bind(&input.skills)
            .bind(input.status.as_deref().unwrap_or(STATUS_OPEN))
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Internship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM internships WHERE id = $1");
        sqlx::query_as::<_, Internship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List internships, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Internship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM internships
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Internship>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Partially update an internship. Uses `COALESCE` so only provided
    /// fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInternship,
    ) -> Result<Option<Internship>, sqlx::Error> {
        let query = format!(
            "UPDATE internships SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                duration_weeks = COALESCE($5, duration_weeks),
                stipend = COALESCE($6, stipend),
                skills = COALESCE($7, skills),
                status = COALESCE($8, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Internship>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.duration_weeks)
            .bind(input.stipend)
            .bind(&input.skills)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an internship. Fails with `fk_applications_internship` or
    /// `fk_tasks_internship` while applications or tasks reference it.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
