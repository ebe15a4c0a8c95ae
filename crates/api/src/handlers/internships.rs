//! Handlers for `/internships`: the listing catalogue plus the nested
//! apply, applications and tasks endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::application::{check_can_apply, validate_cover_letter};
use launchpad_core::error::CoreError;
use launchpad_core::internship::{self, InternshipFields, STATUS_OPEN};
use launchpad_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use launchpad_core::task;
use launchpad_core::types::DbId;
use launchpad_db::models::application::{ApplyRequest, CreateApplication};
use launchpad_db::models::internship::{CreateInternship, Internship, UpdateInternship};
use launchpad_db::models::task::CreateTask;
use launchpad_db::repositories::{ApplicationRepo, InternshipRepo, TaskRepo, UserRepo};
use launchpad_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::InternshipListParams;
use crate::response::DataResponse;
use crate::state::AppState;

pub(crate) async fn find_internship(pool: &DbPool, id: DbId) -> AppResult<Internship> {
    InternshipRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Internship",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// GET /api/v1/internships?status=&limit=&offset=
pub async fn list_internships(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<InternshipListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = params.status.as_deref() {
        internship::validate_status(status)?;
    }
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let items =
        InternshipRepo::list(&state.pool, params.status.as_deref(), limit, offset).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/internships
pub async fn create_internship(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateInternship>,
) -> AppResult<impl IntoResponse> {
    internship::validate_fields(&InternshipFields {
        title: Some(&input.title),
        duration_weeks: Some(input.duration_weeks),
        stipend: input.stipend,
        skills: Some(&input.skills),
        status: input.status.as_deref(),
    })?;

    let created = InternshipRepo::create(&state.pool, &input, admin.user_id).await?;

    tracing::info!(
        internship_id = created.id,
        user_id = admin.user_id,
        "Internship created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/internships/{id}
pub async fn get_internship(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_internship(&state.pool, id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/internships/{id}
pub async fn update_internship(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInternship>,
) -> AppResult<impl IntoResponse> {
    internship::validate_fields(&InternshipFields {
        title: input.title.as_deref(),
        duration_weeks: input.duration_weeks,
        stipend: input.stipend,
        skills: input.skills.as_deref(),
        status: input.status.as_deref(),
    })?;

    let updated = InternshipRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Internship",
            id,
        }))?;

    tracing::info!(internship_id = id, user_id = admin.user_id, "Internship updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/internships/{id}
///
/// Refused with 409 while applications or tasks still reference it.
pub async fn delete_internship(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !InternshipRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Internship",
            id,
        }));
    }
    tracing::info!(internship_id = id, user_id = admin.user_id, "Internship deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// POST /api/v1/internships/{id}/apply
///
/// The pre-check only names the rule that was hit. Two concurrent applies
/// both passing it still end with exactly one row: the loser trips a
/// partial unique index and gets the same 409.
pub async fn apply(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<impl IntoResponse> {
    validate_cover_letter(input.cover_letter.as_deref())?;

    let target = find_internship(&state.pool, id).await?;
    if target.status != STATUS_OPEN {
        return Err(CoreError::validation("Internship is not accepting applications").into());
    }

    let existing = ApplicationRepo::existing_for_user(&state.pool, user.user_id).await?;
    check_can_apply(&existing, id)?;

    let application = ApplicationRepo::create(
        &state.pool,
        &CreateApplication {
            user_id: user.user_id,
            internship_id: id,
            cover_letter: input.cover_letter,
        },
    )
    .await?;

    tracing::info!(
        application_id = application.id,
        internship_id = id,
        user_id = user.user_id,
        "Application submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/internships/{id}/applications
pub async fn list_applications(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_internship(&state.pool, id).await?;
    let items = ApplicationRepo::list_for_internship(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// GET /api/v1/internships/{id}/tasks
///
/// Admins get every task. Participants get the tasks visible to them;
/// anyone else is refused.
pub async fn list_tasks(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_internship(&state.pool, id).await?;

    let items = if user.is_admin() {
        TaskRepo::list_for_internship(&state.pool, id).await?
    } else {
        if !ApplicationRepo::is_participant(&state.pool, user.user_id, id).await? {
            return Err(AppError::Core(CoreError::Forbidden(
                "You are not a participant of this internship".into(),
            )));
        }
        TaskRepo::list_for_internship_and_user(&state.pool, id, user.user_id, true).await?
    };

    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/internships/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateTask>,
) -> AppResult<impl IntoResponse> {
    task::validate_fields(Some(&input.title))?;
    find_internship(&state.pool, id).await?;
    if let Some(assignee) = input.assigned_to {
        ensure_user_exists(&state.pool, assignee).await?;
    }

    let created = TaskRepo::create(&state.pool, id, &input, admin.user_id).await?;

    tracing::info!(
        task_id = created.id,
        internship_id = id,
        user_id = admin.user_id,
        "Task created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

pub(crate) async fn ensure_user_exists(pool: &DbPool, user_id: DbId) -> AppResult<()> {
    if UserRepo::find_by_id(pool, user_id).await?.is_none() {
        return Err(CoreError::Validation(format!("Assignee {user_id} does not exist")).into());
    }
    Ok(())
}
