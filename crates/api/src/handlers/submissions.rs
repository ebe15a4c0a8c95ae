//! Handlers for `/submissions`: review and feedback.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use launchpad_core::error::CoreError;
use launchpad_core::submission::{ensure_reviewable, validate_decision, validate_feedback};
use launchpad_core::types::DbId;
use launchpad_db::models::submission::{CreateFeedback, Feedback, ReviewSubmission, Submission};
use launchpad_db::repositories::{FeedbackRepo, SubmissionRepo};
use launchpad_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub submission: Submission,
    pub feedback: Option<Feedback>,
}

fn submission_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Submission",
        id,
    })
}

async fn find_submission(pool: &DbPool, id: DbId) -> AppResult<Submission> {
    SubmissionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| submission_not_found(id))
}

/// Load a submission the caller owns, or any submission for admins.
async fn find_readable(pool: &DbPool, user: &AuthUser, id: DbId) -> AppResult<Submission> {
    let submission = find_submission(pool, id).await?;
    if submission.user_id != user.user_id && !user.is_admin() {
        return Err(submission_not_found(id));
    }
    Ok(submission)
}

/// GET /api/v1/submissions/mine
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let items = SubmissionRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/submissions/{id}
pub async fn get_submission(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = find_readable(&state.pool, &user, id).await?;
    Ok(Json(DataResponse { data: submission }))
}

/// POST /api/v1/submissions/{id}/review
///
/// Only pending submissions can be reviewed. A non-empty `comment` is
/// stored as feedback in the same transaction as the decision.
pub async fn review(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewSubmission>,
) -> AppResult<impl IntoResponse> {
    validate_decision(&input.decision)?;
    let comment = input
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    if let Some(message) = comment {
        validate_feedback(message, input.rating)?;
    }

    let current = find_submission(&state.pool, id).await?;
    ensure_reviewable(&current.status)?;

    let (submission, feedback) = SubmissionRepo::review(
        &state.pool,
        id,
        &input.decision,
        admin.user_id,
        comment.map(|m| (m, input.rating)),
    )
    .await?
    // Lost a race with another reviewer.
    .ok_or_else(|| {
        AppError::Core(CoreError::Conflict(
            "Submission has already been reviewed".into(),
        ))
    })?;

    tracing::info!(
        submission_id = id,
        decision = %input.decision,
        user_id = admin.user_id,
        "Submission reviewed",
    );

    Ok(Json(DataResponse {
        data: ReviewResponse {
            submission,
            feedback,
        },
    }))
}

/// GET /api/v1/submissions/{id}/feedback
pub async fn list_feedback(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_readable(&state.pool, &user, id).await?;
    let items = FeedbackRepo::list_for_submission(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/submissions/{id}/feedback
pub async fn add_feedback(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    validate_feedback(&input.message, input.rating)?;
    find_submission(&state.pool, id).await?;

    let feedback = FeedbackRepo::create(&state.pool, id, admin.user_id, &input).await?;

    tracing::info!(
        feedback_id = feedback.id,
        submission_id = id,
        user_id = admin.user_id,
        "Feedback added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}
