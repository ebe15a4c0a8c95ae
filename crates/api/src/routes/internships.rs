//! Route definitions for `/internships`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::internships;
use crate::state::AppState;

/// ```text
/// GET    /                      -> list_internships
/// POST   /                      -> create_internship (admin)
/// GET    /{id}                  -> get_internship
/// PUT    /{id}                  -> update_internship (admin)
/// DELETE /{id}                  -> delete_internship (admin)
/// POST   /{id}/apply            -> apply
/// GET    /{id}/applications     -> list_applications (admin)
/// GET    /{id}/tasks            -> list_tasks
/// POST   /{id}/tasks            -> create_task (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(internships::list_internships).post(internships::create_internship),
        )
        .route(
            "/{id}",
            get(internships::get_internship)
                .put(internships::update_internship)
                .delete(internships::delete_internship),
        )
        .route("/{id}/apply", post(internships::apply))
        .route("/{id}/applications", get(internships::list_applications))
        .route(
            "/{id}/tasks",
            get(internships::list_tasks).post(internships::create_task),
        )
}
