//! Repository for the `portfolios` table and its view archive.

use chrono::NaiveDate;
use launchpad_core::portfolio::TEMPLATE_CLASSIC;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{
    CreatePortfolio, DailyViewRow, Portfolio, PortfolioPage, UpdatePortfolio,
};
use crate::repositories::{ButtonRepo, CardRepo, PortfolioSectionRepo, ThemeRepo};

const COLUMNS: &str = "id, user_id, slug, title, template, theme_id, is_published, \
                        total_views, created_at, updated_at";

/// Provides storage for portfolios and view analytics.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert the user's portfolio. A second portfolio for the same user
    /// violates `uq_portfolios_user`; a taken slug violates `uq_portfolios_slug`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePortfolio,
    ) -> Result<Portfolio, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolios (user_id, slug, title, template, theme_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(user_id)
            .bind(&input.slug)
            .bind(input.title.trim())
            .bind(input.template.as_deref().unwrap_or(TEMPLATE_CLASSIC))
            .bind(input.theme_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE user_id = $1");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published portfolio by its public slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolios WHERE slug = $1 AND is_published = true");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Partially update portfolio settings. A present `theme_id: None`
    /// detaches the theme.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolio,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolios SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                template = COALESCE($4, template),
                theme_id = CASE WHEN $5 THEN $6 ELSE theme_id END,
                is_published = COALESCE($7, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.template)
            .bind(input.theme_id.is_some())
            .bind(input.theme_id.flatten())
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a portfolio together with its sections and view archive.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count one view: bump the running total and today's bucket (UTC) in a
    /// single transaction. Both statements increment in place, so concurrent
    /// views are never lost.
    ///
    /// Returns the new total.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let total = sqlx::query_scalar::<_, i64>(
            "UPDATE portfolios SET total_views = total_views + 1
             WHERE id = $1
             RETURNING total_views",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO portfolio_daily_views (portfolio_id, day, views)
             VALUES ($1, (NOW() AT TIME ZONE 'UTC')::date, 1)
             ON CONFLICT (portfolio_id, day) DO UPDATE SET
                 views = portfolio_daily_views.views + 1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(total)
    }

    /// Daily view rows from `since` (inclusive), oldest first.
    pub async fn daily_views(
        pool: &PgPool,
        id: DbId,
        since: NaiveDate,
    ) -> Result<Vec<DailyViewRow>, sqlx::Error> {
        sqlx::query_as::<_, DailyViewRow>(
            "SELECT day, views FROM portfolio_daily_views
             WHERE portfolio_id = $1 AND day >= $2
             ORDER BY day ASC",
        )
        .bind(id)
        .bind(since)
        .fetch_all(pool)
        .await
    }

    /// Load every section of a portfolio for rendering.
    pub async fn load_page(
        pool: &PgPool,
        portfolio: Portfolio,
    ) -> Result<PortfolioPage, sqlx::Error> {
        let id = portfolio.id;
        let profile = PortfolioSectionRepo::find_profile(pool, id).await?;
        let overview = PortfolioSectionRepo::find_overview(pool, id).await?;
        let contact = PortfolioSectionRepo::find_contact(pool, id).await?;
        let cards = CardRepo::list(pool, id).await?;
        let buttons = ButtonRepo::list(pool, id).await?;
        let theme = match portfolio.theme_id {
            Some(theme_id) => ThemeRepo::find_by_id(pool, theme_id).await?,
            None => None,
        };

        Ok(PortfolioPage {
            portfolio,
            profile,
            overview,
            cards,
            buttons,
            contact,
            theme,
        })
    }
}
