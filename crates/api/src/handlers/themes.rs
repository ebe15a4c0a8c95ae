//! Handlers for portfolio themes.
//!
//! Any signed-in user can browse themes; only admins manage them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::error::CoreError;
use launchpad_core::theme::{validate_name, validate_tokens};
use launchpad_core::types::DbId;
use launchpad_db::models::theme::{CreateTheme, UpdateTheme};
use launchpad_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

fn theme_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Theme", id })
}

/// GET /api/v1/themes
pub async fn list_themes(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /api/v1/themes/{id}
pub async fn get_theme(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let theme = ThemeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| theme_not_found(id))?;
    Ok(Json(DataResponse { data: theme }))
}

/// POST /api/v1/admin/themes
pub async fn create_theme(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTheme>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;
    validate_tokens(&input.tokens)?;

    let theme = ThemeRepo::create(&state.pool, &input, admin.user_id).await?;

    tracing::info!(
        theme_id = theme.id,
        name = %theme.name,
        user_id = admin.user_id,
        "Theme created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: theme })))
}

/// PUT /api/v1/admin/themes/{id}
pub async fn update_theme(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTheme>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = input.name.as_deref() {
        validate_name(name)?;
    }
    if let Some(tokens) = &input.tokens {
        validate_tokens(tokens)?;
    }

    let theme = ThemeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| theme_not_found(id))?;

    tracing::info!(theme_id = id, user_id = admin.user_id, "Theme updated");

    Ok(Json(DataResponse { data: theme }))
}

/// DELETE /api/v1/admin/themes/{id}
///
/// A theme still selected by a portfolio cannot be deleted (409).
pub async fn delete_theme(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ThemeRepo::delete(&state.pool, id).await? {
        return Err(theme_not_found(id));
    }
    tracing::info!(theme_id = id, user_id = admin.user_id, "Theme deleted");
    Ok(StatusCode::NO_CONTENT)
}
