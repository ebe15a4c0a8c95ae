//! Portfolio builder models and DTOs.
//!
//! A portfolio owns up to one profile, overview, and contact section, any
//! number of cards and buttons, and a per-day view archive.

use chrono::NaiveDate;
use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::theme::Theme;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `portfolios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Portfolio {
    pub id: DbId,
    pub user_id: DbId,
    pub slug: String,
    pub title: String,
    pub template: String,
    pub theme_id: Option<DbId>,
    pub is_published: bool,
    pub total_views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub portfolio_id: DbId,
    pub full_name: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_overviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Overview {
    pub portfolio_id: DbId,
    pub heading: String,
    pub summary: Option<String>,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_buttons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Button {
    pub id: DbId,
    pub portfolio_id: DbId,
    pub label: String,
    pub url: String,
    pub variant: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub portfolio_id: DbId,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub socials: serde_json::Value,
    pub updated_at: Timestamp,
}

/// A row from the `portfolio_daily_views` table (without the key column).
#[derive(Debug, Clone, FromRow)]
pub struct DailyViewRow {
    pub day: NaiveDate,
    pub views: i64,
}

/// Everything needed to render a portfolio page.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPage {
    pub portfolio: Portfolio,
    pub profile: Option<Profile>,
    pub overview: Option<Overview>,
    pub cards: Vec<Card>,
    pub buttons: Vec<Button>,
    pub contact: Option<Contact>,
    pub theme: Option<Theme>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating the caller's portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolio {
    pub slug: String,
    pub title: String,
    pub template: Option<String>,
    pub theme_id: Option<DbId>,
}

/// DTO for partially updating portfolio settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePortfolio {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub template: Option<String>,
    /// `Some(None)` drops the theme.
    #[serde(default, deserialize_with = "super::nullable")]
    pub theme_id: Option<Option<DbId>>,
    pub is_published: Option<bool>,
}

/// DTO for upserting the profile section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertProfile {
    pub full_name: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
}

/// DTO for upserting the overview section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOverview {
    pub heading: String,
    pub summary: Option<String>,
}

/// DTO for adding a card.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCard {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for adding a button.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateButton {
    pub label: String,
    pub url: String,
    pub variant: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a button.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateButton {
    pub label: Option<String>,
    pub url: Option<String>,
    pub variant: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for upserting the contact section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub socials: Option<serde_json::Value>,
}
