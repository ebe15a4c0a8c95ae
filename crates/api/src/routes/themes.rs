//! Route definitions for themes.

use axum::routing::get;
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Read-only browsing, mounted at `/themes`.
///
/// ```text
/// GET /       -> list_themes
/// GET /{id}   -> get_theme
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes))
        .route("/{id}", get(themes::get_theme))
}

/// Admin management, mounted at `/admin/themes`.
///
/// ```text
/// GET    /       -> list_themes
/// POST   /       -> create_theme
/// PUT    /{id}   -> update_theme
/// DELETE /{id}   -> delete_theme
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes).post(themes::create_theme))
        .route(
            "/{id}",
            get(themes::get_theme)
                .put(themes::update_theme)
                .delete(themes::delete_theme),
        )
}
