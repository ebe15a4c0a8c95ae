//! Route definitions for `/portfolio` and `/public/portfolios`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{portfolio, public};
use crate::state::AppState;

/// The caller's own portfolio, mounted at `/portfolio`.
///
/// ```text
/// GET    /                 -> get_portfolio
/// POST   /                 -> create_portfolio
/// PUT    /                 -> update_portfolio
/// DELETE /                 -> delete_portfolio
/// PUT    /profile          -> upsert_profile
/// PUT    /overview         -> upsert_overview
/// PUT    /contact          -> upsert_contact
/// POST   /cards            -> create_card
/// PUT    /cards/{id}       -> update_card
/// DELETE /cards/{id}       -> delete_card
/// POST   /buttons          -> create_button
/// PUT    /buttons/{id}     -> update_button
/// DELETE /buttons/{id}     -> delete_button
/// GET    /analytics        -> analytics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(portfolio::get_portfolio)
                .post(portfolio::create_portfolio)
                .put(portfolio::update_portfolio)
                .delete(portfolio::delete_portfolio),
        )
        .route("/profile", put(portfolio::upsert_profile))
        .route("/overview", put(portfolio::upsert_overview))
        .route("/contact", put(portfolio::upsert_contact))
        .route("/cards", post(portfolio::create_card))
        .route(
            "/cards/{id}",
            put(portfolio::update_card).delete(portfolio::delete_card),
        )
        .route("/buttons", post(portfolio::create_button))
        .route(
            "/buttons/{id}",
            put(portfolio::update_button).delete(portfolio::delete_button),
        )
        .route("/analytics", get(portfolio::analytics))
}

/// Public pages, mounted at `/public/portfolios`. No auth.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{slug}", get(public::get_public_portfolio))
}
