//! Handlers for `/applications`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::application::{validate_transition, ApplicationStatus};
use launchpad_core::error::CoreError;
use launchpad_core::types::DbId;
use launchpad_db::models::application::{Application, UpdateApplicationStatus};
use launchpad_db::repositories::ApplicationRepo;
use launchpad_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

async fn find_application(pool: &DbPool, id: DbId) -> AppResult<Application> {
    ApplicationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))
}

/// Parse a stored status. The check constraint keeps this infallible in
/// practice; a mismatch means the schema and the enum have drifted.
fn stored_status(application: &Application) -> AppResult<ApplicationStatus> {
    application.status.parse().map_err(|_| {
        AppError::InternalError(format!(
            "Application {} has unknown status '{}'",
            application.id, application.status
        ))
    })
}

/// Apply a validated transition. A concurrent change between read and write
/// surfaces as 409.
async fn transition(
    pool: &DbPool,
    application: &Application,
    next: ApplicationStatus,
    actor_id: DbId,
) -> AppResult<Application> {
    let current = stored_status(application)?;
    validate_transition(current, next)?;

    ApplicationRepo::update_status(pool, application.id, current, next, actor_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Application status changed concurrently; reload and retry".into(),
            ))
        })
}

/// GET /api/v1/applications/mine
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let items = ApplicationRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/applications/{id}
///
/// Owners and admins only. Other users get a 404 so other ids stay hidden.
pub async fn get_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = find_application(&state.pool, id).await?;
    if application.user_id != user.user_id && !user.is_admin() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }));
    }
    Ok(Json(DataResponse { data: application }))
}

/// PUT /api/v1/applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<impl IntoResponse> {
    let next: ApplicationStatus = input.status.parse()?;
    let application = find_application(&state.pool, id).await?;
    let updated = transition(&state.pool, &application, next, admin.user_id).await?;

    tracing::info!(
        application_id = id,
        from = %application.status,
        to = %updated.status,
        user_id = admin.user_id,
        "Application status changed",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/applications/{id}/withdraw
pub async fn withdraw(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = find_application(&state.pool, id).await?;
    if application.user_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the applicant can withdraw an application".into(),
        )));
    }

    let updated =
        transition(&state.pool, &application, ApplicationStatus::Withdrawn, user.user_id).await?;

    tracing::info!(application_id = id, user_id = user.user_id, "Application withdrawn");

    Ok(Json(DataResponse { data: updated }))
}
