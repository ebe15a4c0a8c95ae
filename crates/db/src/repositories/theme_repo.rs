//! Repository for the `themes` table.

use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::theme::{CreateTheme, Theme, UpdateTheme};

const COLUMNS: &str = "id, name, description, tokens, created_by, created_at, updated_at";

/// Provides CRUD operations for portfolio themes.
pub struct ThemeRepo;

impl ThemeRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes ORDER BY name");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateTheme,
        created_by: DbId,
    ) -> Result<Theme, sqlx::Error> {
        let query = format!(
            "INSERT INTO themes (name, description, tokens, created_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(dto.name.trim())
            .bind(&dto.description)
            .bind(&dto.tokens)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Partially update a theme. Uses `COALESCE` so only provided fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTheme,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!(
            "UPDATE themes SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 tokens = COALESCE($4, tokens) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .bind(dto.name.as_deref().map(str::trim))
            .bind(&dto.description)
            .bind(&dto.tokens)
            .fetch_optional(pool)
            .await
    }

    /// Delete a theme. Fails with `fk_portfolios_theme` while a portfolio
    /// uses it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM themes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
