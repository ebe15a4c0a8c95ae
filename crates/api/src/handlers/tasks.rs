//! Handlers for `/tasks` and task submissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::error::CoreError;
use launchpad_core::submission::validate_content;
use launchpad_core::task::{self, is_visible_to};
use launchpad_core::types::DbId;
use launchpad_db::models::submission::CreateSubmission;
use launchpad_db::models::task::{Task, UpdateTask};
use launchpad_db::repositories::{ApplicationRepo, SubmissionRepo, TaskRepo};
use launchpad_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::internships::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

pub(crate) async fn find_task(pool: &DbPool, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))
}

/// Whether `user` may see `task`. Admins see everything.
async fn can_see(pool: &DbPool, user: &AuthUser, task: &Task) -> AppResult<bool> {
    if user.is_admin() {
        return Ok(true);
    }
    let participant = match task.assigned_to {
        Some(_) => false,
        None => ApplicationRepo::is_participant(pool, user.user_id, task.internship_id).await?,
    };
    Ok(is_visible_to(task.assigned_to, user.user_id, participant))
}

/// GET /api/v1/tasks/mine
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let items = TaskRepo::list_visible_to_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/tasks/{id}
///
/// Hidden tasks answer 404, the same as missing ones.
pub async fn get_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = find_task(&state.pool, id).await?;
    if !can_see(&state.pool, &user, &task).await? {
        return Err(task_not_found(id));
    }
    Ok(Json(DataResponse { data: task }))
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<impl IntoResponse> {
    task::validate_fields(input.title.as_deref())?;
    if let Some(Some(assignee)) = input.assigned_to {
        ensure_user_exists(&state.pool, assignee).await?;
    }

    let updated = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    tracing::info!(task_id = id, user_id = admin.user_id, "Task updated");
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/tasks/{id}
///
/// Refused with 409 once submissions exist.
pub async fn delete_task(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(task_not_found(id));
    }
    tracing::info!(task_id = id, user_id = admin.user_id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tasks/{id}/submissions
///
/// Requires task visibility. A second pending submission for the same task
/// trips `uq_submissions_task_user_pending` and becomes a 409.
pub async fn submit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content, input.link_url.as_deref())?;

    let task = find_task(&state.pool, id).await?;
    if !can_see(&state.pool, &user, &task).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "This task is not assigned to you".into(),
        )));
    }

    let submission = SubmissionRepo::create(&state.pool, id, user.user_id, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        task_id = id,
        user_id = user.user_id,
        "Submission created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/tasks/{id}/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_task(&state.pool, id).await?;
    let items = SubmissionRepo::list_for_task(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}
