//! Handlers for `/portfolio`: the caller's own portfolio, its sections,
//! and its view analytics.
//!
//! Every route here acts on the caller's portfolio, so no portfolio id
//! appears in the path. Card and button ids are always scoped to it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use launchpad_core::analytics::{build_daily_series, clamp_window, window_start, DailyViews};
use launchpad_core::error::CoreError;
use launchpad_core::portfolio::{
    ensure_below_limit, validate_button_variant, validate_email, validate_label,
    validate_optional_url, validate_slug, validate_socials, validate_template, validate_url,
    MAX_BUTTONS, MAX_CARDS,
};
use launchpad_core::types::DbId;
use launchpad_db::models::portfolio::{
    CreateButton, CreateCard, CreatePortfolio, Portfolio, UpdateButton, UpdateCard,
    UpdatePortfolio, UpsertContact, UpsertOverview, UpsertProfile,
};
use launchpad_db::repositories::{
    ButtonRepo, CardRepo, PortfolioRepo, PortfolioSectionRepo, ThemeRepo,
};
use launchpad_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::AnalyticsParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub total_views: i64,
    pub days: i64,
    pub series: Vec<DailyViews>,
}

/// The caller's portfolio, or 404 when they have not created one yet.
async fn own_portfolio(pool: &DbPool, user: &AuthUser) -> AppResult<Portfolio> {
    PortfolioRepo::find_by_user(pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id: user.user_id,
        }))
}

async fn ensure_theme_exists(pool: &DbPool, theme_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = theme_id {
        if ThemeRepo::find_by_id(pool, id).await?.is_none() {
            return Err(CoreError::Validation(format!("Theme {id} does not exist")).into());
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

/// GET /api/v1/portfolio
pub async fn get_portfolio(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let portfolio = own_portfolio(&state.pool, &user).await?;
    let page = PortfolioRepo::load_page(&state.pool, portfolio).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/portfolio
pub async fn create_portfolio(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePortfolio>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;
    validate_label("title", &input.title)?;
    if let Some(template) = input.template.as_deref() {
        validate_template(template)?;
    }
    ensure_theme_exists(&state.pool, input.theme_id).await?;

    let portfolio = PortfolioRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        portfolio_id = portfolio.id,
        slug = %portfolio.slug,
        user_id = user.user_id,
        "Portfolio created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: portfolio })))
}

/// PUT /api/v1/portfolio
pub async fn update_portfolio(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdatePortfolio>,
) -> AppResult<impl IntoResponse> {
    if let Some(slug) = input.slug.as_deref() {
        validate_slug(slug)?;
    }
    if let Some(title) = input.title.as_deref() {
        validate_label("title", title)?;
    }
    if let Some(template) = input.template.as_deref() {
        validate_template(template)?;
    }
    ensure_theme_exists(&state.pool, input.theme_id.flatten()).await?;

    let current = own_portfolio(&state.pool, &user).await?;
    let updated = PortfolioRepo::update(&state.pool, current.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id: current.id,
        }))?;

    tracing::info!(
        portfolio_id = updated.id,
        is_published = updated.is_published,
        user_id = user.user_id,
        "Portfolio updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/portfolio
///
/// Sections and the view archive go with it.
pub async fn delete_portfolio(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<StatusCode> {
    let current = own_portfolio(&state.pool, &user).await?;
    PortfolioRepo::delete(&state.pool, current.id).await?;
    tracing::info!(portfolio_id = current.id, user_id = user.user_id, "Portfolio deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Single sections
// ---------------------------------------------------------------------------

/// PUT /api/v1/portfolio/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpsertProfile>,
) -> AppResult<impl IntoResponse> {
    validate_label("full_name", &input.full_name)?;
    validate_optional_url("avatar_url", input.avatar_url.as_deref())?;

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let profile = PortfolioSectionRepo::upsert_profile(&state.pool, portfolio.id, &input).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/portfolio/overview
pub async fn upsert_overview(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpsertOverview>,
) -> AppResult<impl IntoResponse> {
    validate_label("heading", &input.heading)?;

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let overview =
        PortfolioSectionRepo::upsert_overview(&state.pool, portfolio.id, &input).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// PUT /api/v1/portfolio/contact
pub async fn upsert_contact(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpsertContact>,
) -> AppResult<impl IntoResponse> {
    if let Some(email) = input.email.as_deref().filter(|e| !e.is_empty()) {
        validate_email(email)?;
    }
    validate_optional_url("website", input.website.as_deref())?;
    if let Some(socials) = &input.socials {
        validate_socials(socials)?;
    }

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let contact = PortfolioSectionRepo::upsert_contact(&state.pool, portfolio.id, &input).await?;
    Ok(Json(DataResponse { data: contact }))
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

fn card_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Card", id })
}

/// POST /api/v1/portfolio/cards
pub async fn create_card(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCard>,
) -> AppResult<impl IntoResponse> {
    validate_label("title", &input.title)?;
    validate_optional_url("image_url", input.image_url.as_deref())?;
    validate_optional_url("link_url", input.link_url.as_deref())?;

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let count = CardRepo::count(&state.pool, portfolio.id).await?;
    ensure_below_limit("cards", count, MAX_CARDS)?;

    let card = CardRepo::create(&state.pool, portfolio.id, &input).await?;
    tracing::info!(card_id = card.id, portfolio_id = portfolio.id, "Card added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// PUT /api/v1/portfolio/cards/{id}
pub async fn update_card(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCard>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = input.title.as_deref() {
        validate_label("title", title)?;
    }
    validate_optional_url("image_url", input.image_url.as_deref())?;
    validate_optional_url("link_url", input.link_url.as_deref())?;

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let card = CardRepo::update(&state.pool, portfolio.id, id, &input)
        .await?
        .ok_or_else(|| card_not_found(id))?;
    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/portfolio/cards/{id}
pub async fn delete_card(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let portfolio = own_portfolio(&state.pool, &user).await?;
    if !CardRepo::delete(&state.pool, portfolio.id, id).await? {
        return Err(card_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

fn button_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Button",
        id,
    })
}

/// POST /api/v1/portfolio/buttons
pub async fn create_button(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateButton>,
) -> AppResult<impl IntoResponse> {
    validate_label("label", &input.label)?;
    validate_url("url", &input.url)?;
    if let Some(variant) = input.variant.as_deref() {
        validate_button_variant(variant)?;
    }

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let count = ButtonRepo::count(&state.pool, portfolio.id).await?;
    ensure_below_limit("buttons", count, MAX_BUTTONS)?;

    let button = ButtonRepo::create(&state.pool, portfolio.id, &input).await?;
    tracing::info!(button_id = button.id, portfolio_id = portfolio.id, "Button added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: button })))
}

/// PUT /api/v1/portfolio/buttons/{id}
pub async fn update_button(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateButton>,
) -> AppResult<impl IntoResponse> {
    if let Some(label) = input.label.as_deref() {
        validate_label("label", label)?;
    }
    if let Some(url) = input.url.as_deref() {
        validate_url("url", url)?;
    }
    if let Some(variant) = input.variant.as_deref() {
        validate_button_variant(variant)?;
    }

    let portfolio = own_portfolio(&state.pool, &user).await?;
    let button = ButtonRepo::update(&state.pool, portfolio.id, id, &input)
        .await?
        .ok_or_else(|| button_not_found(id))?;
    Ok(Json(DataResponse { data: button }))
}

/// DELETE /api/v1/portfolio/buttons/{id}
pub async fn delete_button(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let portfolio = own_portfolio(&state.pool, &user).await?;
    if !ButtonRepo::delete(&state.pool, portfolio.id, id).await? {
        return Err(button_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// GET /api/v1/portfolio/analytics?days=
///
/// `days` defaults to 30 and is clamped to `1..=365`. Days are UTC.
pub async fn analytics(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AnalyticsParams>,
) -> AppResult<impl IntoResponse> {
    let portfolio = own_portfolio(&state.pool, &user).await?;

    let days = clamp_window(params.days);
    let today = Utc::now().date_naive();
    let rows: Vec<_> =
        PortfolioRepo::daily_views(&state.pool, portfolio.id, window_start(today, days))
            .await?
            .into_iter()
            .map(|row| (row.day, row.views))
            .collect();

    Ok(Json(DataResponse {
        data: AnalyticsResponse {
            total_views: portfolio.total_views,
            days,
            series: build_daily_series(today, days, &rows),
        },
    }))
}
