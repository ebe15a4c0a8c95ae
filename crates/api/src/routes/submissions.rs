//! Route definitions for `/submissions`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// ```text
/// GET  /mine            -> list_mine
/// GET  /{id}            -> get_submission (owner or admin)
/// POST /{id}/review     -> review (admin)
/// GET  /{id}/feedback   -> list_feedback (owner or admin)
/// POST /{id}/feedback   -> add_feedback (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(submissions::list_mine))
        .route("/{id}", get(submissions::get_submission))
        .route("/{id}/review", post(submissions::review))
        .route(
            "/{id}/feedback",
            get(submissions::list_feedback).post(submissions::add_feedback),
        )
}
