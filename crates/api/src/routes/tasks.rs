//! Route definitions for `/tasks`.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// ```text
/// GET    /mine               -> list_mine
/// GET    /{id}               -> get_task
/// PUT    /{id}               -> update_task (admin)
/// DELETE /{id}               -> delete_task (admin)
/// GET    /{id}/submissions   -> list_submissions (admin)
/// POST   /{id}/submissions   -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(tasks::list_mine))
        .route(
            "/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route(
            "/{id}/submissions",
            get(tasks::list_submissions).post(tasks::submit),
        )
}
