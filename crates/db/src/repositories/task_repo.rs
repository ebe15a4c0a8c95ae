//! Repository for the `tasks` table.

use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str = "id, internship_id, title, description, due_at, assigned_to, \
                        created_by, created_at, updated_at";

/// Provides CRUD operations for internship tasks.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn create(
        pool: &PgPool,
        internship_id: DbId,
        input: &CreateTask,
        created_by: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (internship_id, title, description, due_at, assigned_to, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(internship_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.due_at)
            .bind(input.assigned_to)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Tasks of one internship ordered by due date (undated last).
    pub async fn list_for_internship(
        pool: &PgPool,
        internship_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE internship_id = $1
             ORDER BY due_at ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(internship_id)
            .fetch_all(pool)
            .await
    }

    /// Tasks of one internship that `user_id` may see: assigned to them, or
    /// unassigned when `include_unassigned` is set.
    pub async fn list_for_internship_and_user(
        pool: &PgPool,
        internship_id: DbId,
        user_id: DbId,
        include_unassigned: bool,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE internship_id = $1
               AND (assigned_to = $2 OR ($3 AND assigned_to IS NULL))
             ORDER BY due_at ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(internship_id)
            .bind(user_id)
            .bind(include_unassigned)
            .fetch_all(pool)
            .await
    }

    /// Every task visible to a user across all internships.
    pub async fn list_visible_to_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks t
             WHERE t.assigned_to = $1
                OR (t.assigned_to IS NULL AND EXISTS (
                    SELECT 1 FROM applications a
                    WHERE a.user_id = $1
                      AND a.internship_id = t.internship_id
                      AND a.status IN ('accepted', 'active')
                ))
             ORDER BY t.due_at ASC NULLS LAST, t.id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a task. `due_at` and `assigned_to` are only touched
    /// when present in the patch, and a present `None` clears them.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                due_at = CASE WHEN $4 THEN $5 ELSE due_at END,
                assigned_to = CASE WHEN $6 THEN $7 ELSE assigned_to END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(input.due_at.is_some())
            .bind(input.due_at.flatten())
            .bind(input.assigned_to.is_some())
            .bind(input.assigned_to.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Fails with `fk_submissions_task` once work was submitted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
