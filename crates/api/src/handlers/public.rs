//! Unauthenticated portfolio pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use launchpad_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/public/portfolios/{slug}
///
/// Unpublished and unknown slugs are indistinguishable (404). Each served
/// page counts one view; the returned page carries the updated total.
pub async fn get_public_portfolio(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut portfolio = PortfolioRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No published portfolio at '{slug}'")))?;

    portfolio.total_views = PortfolioRepo::record_view(&state.pool, portfolio.id).await?;
    tracing::debug!(
        portfolio_id = portfolio.id,
        total_views = portfolio.total_views,
        "Portfolio view recorded",
    );

    let page = PortfolioRepo::load_page(&state.pool, portfolio).await?;
    Ok(Json(DataResponse { data: page }))
}
