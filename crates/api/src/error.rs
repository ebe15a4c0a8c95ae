use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use launchpad_core::error::CoreError;
use serde_json::json;

/// Error type returned by every HTTP handler.
///
/// Domain failures arrive as [`CoreError`]; storage failures as raw
/// [`sqlx::Error`] and are classified by constraint name on the way out.
/// The body is always `{ "error": <message>, "code": <CODE> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A lookup by something other than an id (e.g. a slug) found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
    }
}

/// Map a sqlx error onto an HTTP status using the migration naming scheme.
///
/// | SQLSTATE | constraint prefix | status |
/// |----------|-------------------|--------|
/// | `23505`  | `uq_`             | 409    |
/// | `23503`  | `fk_`             | 409    |
/// | `23514`  | `ck_`             | 400    |
///
/// `RowNotFound` is a 404. Anything else is logged and hidden behind a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match (db_err.code().as_deref(), constraint) {
                (Some("23505"), c) if c.starts_with("uq_") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    conflict_message(c),
                ),
                (Some("23503"), c) if c.starts_with("fk_") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Operation violates reference constraint: {c}"),
                ),
                (Some("23514"), c) if c.starts_with("ck_") => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {c}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    internal()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Friendlier wording for the unique indexes users actually run into.
fn conflict_message(constraint: &str) -> String {
    match constraint {
        "uq_applications_user_open" => "You already have an open application".to_string(),
        "uq_submissions_task_user_pending" => {
            "You already have a pending submission for this task".to_string()
        }
        "uq_portfolios_user" => "You already have a portfolio".to_string(),
        "uq_portfolios_slug" => "That portfolio slug is taken".to_string(),
        "uq_users_email" => "Email is already registered".to_string(),
        "uq_users_username" => "Username is already taken".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}
