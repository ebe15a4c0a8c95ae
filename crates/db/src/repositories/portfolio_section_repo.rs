//! Repositories for portfolio content sections.
//!
//! Single-row sections (profile, overview, contact) are keyed by
//! `portfolio_id` and written with upserts. Cards and buttons are lists;
//! their mutators take the owning `portfolio_id` so one user can never touch
//! another user's rows.

use launchpad_core::portfolio::BUTTON_PRIMARY;
use launchpad_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{
    Button, Card, Contact, CreateButton, CreateCard, Overview, Profile, UpdateButton, UpdateCard,
    UpsertContact, UpsertOverview, UpsertProfile,
};

const PROFILE_COLUMNS: &str =
    "portfolio_id, full_name, headline, bio, avatar_url, location, updated_at";
const OVERVIEW_COLUMNS: &str = "portfolio_id, heading, summary, updated_at";
const CONTACT_COLUMNS: &str = "portfolio_id, email, phone, website, socials, updated_at";
const CARD_COLUMNS: &str = "id, portfolio_id, title, description, image_url, link_url, \
                             sort_order, created_at, updated_at";
const BUTTON_COLUMNS: &str =
    "id, portfolio_id, label, url, variant, sort_order, created_at, updated_at";

/// Single-row portfolio sections.
pub struct PortfolioSectionRepo;

impl PortfolioSectionRepo {
    pub async fn find_profile(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query =
            format!("SELECT {PROFILE_COLUMNS} FROM portfolio_profiles WHERE portfolio_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert_profile(
        pool: &PgPool,
        portfolio_id: DbId,
        dto: &UpsertProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_profiles
                 (portfolio_id, full_name, headline, bio, avatar_url, location)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (portfolio_id) DO UPDATE SET
                 full_name = EXCLUDED.full_name,
                 headline = EXCLUDED.headline,
                 bio = EXCLUDED.bio,
                 avatar_url = EXCLUDED.avatar_url,
                 location = EXCLUDED.location
             RETURNING {PROFILE_COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(portfolio_id)
            .bind(dto.full_name.trim())
            .bind(&dto.headline)
            .bind(&dto.bio)
            .bind(&dto.avatar_url)
            .bind(&dto.location)
            .fetch_one(pool)
            .await
    }

    pub async fn find_overview(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Option<Overview>, sqlx::Error> {
        let query =
            format!("SELECT {OVERVIEW_COLUMNS} FROM portfolio_overviews WHERE portfolio_id = $1");
        sqlx::query_as::<_, Overview>(&query)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert_overview(
        pool: &PgPool,
        portfolio_id: DbId,
        dto: &UpsertOverview,
    ) -> Result<Overview, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_overviews (portfolio_id, heading, summary)
             VALUES ($1, $2, $3)
             ON CONFLICT (portfolio_id) DO UPDATE SET
                 heading = EXCLUDED.heading,
                 summary = EXCLUDED.summary
             RETURNING {OVERVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, Overview>(&query)
            .bind(portfolio_id)
            .bind(dto.heading.trim())
            .bind(&dto.summary)
            .fetch_one(pool)
            .await
    }

    pub async fn find_contact(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query =
            format!("SELECT {CONTACT_COLUMNS} FROM portfolio_contacts WHERE portfolio_id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(portfolio_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert_contact(
        pool: &PgPool,
        portfolio_id: DbId,
        dto: &UpsertContact,
    ) -> Result<Contact, sqlx::Error> {
        let socials = dto
            .socials
            .clone()
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        let query = format!(
            "INSERT INTO portfolio_contacts (portfolio_id, email, phone, website, socials)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (portfolio_id) DO UPDATE SET
                 email = EXCLUDED.email,
                 phone = EXCLUDED.phone,
                 website = EXCLUDED.website,
                 socials = EXCLUDED.socials
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(portfolio_id)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.website)
            .bind(&socials)
            .fetch_one(pool)
            .await
    }
}

/// Showcase cards of the overview section.
pub struct CardRepo;

impl CardRepo {
    /// Cards in display order.
    pub async fn list(pool: &PgPool, portfolio_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {CARD_COLUMNS} FROM portfolio_cards
             WHERE portfolio_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, portfolio_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM portfolio_cards WHERE portfolio_id = $1")
            .bind(portfolio_id)
            .fetch_one(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        dto: &CreateCard,
    ) -> Result<Card, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_cards
                 (portfolio_id, title, description, image_url, link_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CARD_COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(portfolio_id)
            .bind(dto.title.trim())
            .bind(&dto.description)
            .bind(&dto.image_url)
            .bind(&dto.link_url)
            .bind(dto.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Update a card owned by `portfolio_id`. Returns `None` for a card that
    /// does not exist or belongs to another portfolio.
    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        dto: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_cards SET
                 title = COALESCE($3, title),
                 description = COALESCE($4, description),
                 image_url = COALESCE($5, image_url),
                 link_url = COALESCE($6, link_url),
                 sort_order = COALESCE($7, sort_order)
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {CARD_COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(dto.title.as_deref().map(str::trim))
            .bind(&dto.description)
            .bind(&dto.image_url)
            .bind(&dto.link_url)
            .bind(dto.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_cards WHERE id = $1 AND portfolio_id = $2")
            .bind(id)
            .bind(portfolio_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Call-to-action buttons.
pub struct ButtonRepo;

impl ButtonRepo {
    /// Buttons in display order.
    pub async fn list(pool: &PgPool, portfolio_id: DbId) -> Result<Vec<Button>, sqlx::Error> {
        let query = format!(
            "SELECT {BUTTON_COLUMNS} FROM portfolio_buttons
             WHERE portfolio_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Button>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, portfolio_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM portfolio_buttons WHERE portfolio_id = $1",
        )
        .bind(portfolio_id)
        .fetch_one(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        portfolio_id: DbId,
        dto: &CreateButton,
    ) -> Result<Button, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_buttons (portfolio_id, label, url, variant, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {BUTTON_COLUMNS}"
        );
        sqlx::query_as::<_, Button>(&query)
            .bind(portfolio_id)
            .bind(dto.label.trim())
            .bind(&dto.url)
            .bind(dto.variant.as_deref().unwrap_or(BUTTON_PRIMARY))
            .bind(dto.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        portfolio_id: DbId,
        id: DbId,
        dto: &UpdateButton,
    ) -> Result<Option<Button>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_buttons SET
                 label = COALESCE($3, label),
                 url = COALESCE($4, url),
                 variant = COALESCE($5, variant),
                 sort_order = COALESCE($6, sort_order)
             WHERE id = $1 AND portfolio_id = $2
             RETURNING {BUTTON_COLUMNS}"
        );
        sqlx::query_as::<_, Button>(&query)
            .bind(id)
            .bind(portfolio_id)
            .bind(dto.label.as_deref().map(str::trim))
            .bind(&dto.url)
            .bind(&dto.variant)
            .bind(dto.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, portfolio_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM portfolio_buttons WHERE id = $1 AND portfolio_id = $2")
                .bind(id)
                .bind(portfolio_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
