//! Route definitions for `/applications`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// ```text
/// GET  /mine           -> list_mine
/// GET  /{id}           -> get_application (owner or admin)
/// PUT  /{id}/status    -> update_status (admin)
/// POST /{id}/withdraw  -> withdraw (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(applications::list_mine))
        .route("/{id}", get(applications::get_application))
        .route("/{id}/status", put(applications::update_status))
        .route("/{id}/withdraw", post(applications::withdraw))
}
