pub mod admin;
pub mod applications;
pub mod auth;
pub mod health;
pub mod internships;
pub mod portfolio;
pub mod submissions;
pub mod tasks;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                           register (public)
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/logout                             logout (auth)
/// /auth/me                                 current user (auth)
///
/// /admin/users                             list (admin)
/// /admin/users/{id}                        get, update, deactivate (admin)
/// /admin/users/{id}/reset-password         reset password (admin)
/// /admin/themes                            list, create (admin)
/// /admin/themes/{id}                       get, update, delete (admin)
///
/// /internships                             list (auth), create (admin)
/// /internships/{id}                        get (auth), update, delete (admin)
/// /internships/{id}/apply                  apply (auth)
/// /internships/{id}/applications           list (admin)
/// /internships/{id}/tasks                  list (admin or participant), create (admin)
///
/// /applications/mine                       caller's applications
/// /applications/{id}                       get (owner or admin)
/// /applications/{id}/status                transition (admin)
/// /applications/{id}/withdraw              withdraw (owner)
///
/// /tasks/mine                              tasks visible to the caller
/// /tasks/{id}                              get (visible), update, delete (admin)
/// /tasks/{id}/submissions                  submit (visible), list (admin)
///
/// /submissions/mine                        caller's submissions
/// /submissions/{id}                        get (owner or admin)
/// /submissions/{id}/review                 approve or reject (admin)
/// /submissions/{id}/feedback               list (owner or admin), add (admin)
///
/// /portfolio                               caller's portfolio: get, create, update, delete
/// /portfolio/{profile,overview,contact}    upsert
/// /portfolio/cards[/{id}]                  add, update, delete
/// /portfolio/buttons[/{id}]                add, update, delete
/// /portfolio/analytics                     views (?days=)
///
/// /themes                                  list (auth)
/// /themes/{id}                             get (auth)
///
/// /public/portfolios/{slug}                published page (public, counts a view)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/users", admin::router())
        .nest("/admin/themes", themes::admin_router())
        .nest("/internships", internships::router())
        .nest("/applications", applications::router())
        .nest("/tasks", tasks::router())
        .nest("/submissions", submissions::router())
        .nest("/portfolio", portfolio::router())
        .nest("/themes", themes::router())
        .nest("/public/portfolios", portfolio::public_router())
}
