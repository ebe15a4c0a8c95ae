//! Portfolio builder: sections, publishing, public pages, and analytics.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_status, get, get_auth, post_json_auth, put_json_auth};
use launchpad_core::roles::ROLE_INTERN;
use serde_json::json;
use sqlx::PgPool;

async fn create_portfolio(app: &axum::Router, token: &str, slug: &str) -> serde_json::Value {
    expect_status(
        post_json_auth(
            app.clone(),
            "/api/v1/portfolio",
            token,
            json!({ "slug": slug, "title": "My work", "template": "minimal" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await
}

async fn publish(app: &axum::Router, token: &str) {
    expect_status(
        put_json_auth(
            app.clone(),
            "/api/v1/portfolio",
            token,
            json!({ "is_published": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
}

// ---------------------------------------------------------------------------
// Portfolio settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn one_portfolio_per_user_and_unique_slugs(pool: PgPool) {
    let (_a, alice) = common::user_with_token(&pool, "alice", ROLE_INTERN).await;
    let (_b, bob) = common::user_with_token(&pool, "bob", ROLE_INTERN).await;
    let app = common::build_test_app(pool);

    let created = create_portfolio(&app, &alice, "alice-dev").await;
    assert_eq!(created["data"]["template"], "minimal");
    assert_eq!(created["data"]["is_published"], false);

    let second = post_json_auth(
        app.clone(),
        "/api/v1/portfolio",
        &alice,
        json!({ "slug": "alice-two", "title": "Again" }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let taken = post_json_auth(
        app.clone(),
        "/api/v1/portfolio",
        &bob,
        json!({ "slug": "alice-dev", "title": "Mine" }),
    )
    .await;
    let json = expect_status(taken, StatusCode::CONFLICT).await;
    assert_eq!(json["error"], "That portfolio slug is taken");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_slug_template_and_theme_are_rejected(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "carol", ROLE_INTERN).await;
    let app = common::build_test_app(pool);

    for body in [
        json!({ "slug": "-bad-", "title": "T" }),
        json!({ "slug": "ok-slug", "title": "T", "template": "fancy" }),
        json!({ "slug": "ok-slug", "title": "T", "theme_id": 424242 }),
    ] {
        let response = post_json_auth(app.clone(), "/api/v1/portfolio", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let none = get_auth(app, "/api/v1/portfolio", &token).await;
    assert_eq!(none.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn sections_assemble_into_page(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "dana", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &token, "dana").await;

    expect_status(
        put_json_auth(
            app.clone(),
            "/api/v1/portfolio/profile",
            &token,
            json!({ "full_name": "Dana Scully", "headline": "Engineer",
                    "avatar_url": "https://img.example.com/d.png" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    // Upserting again replaces the row.
    expect_status(
        put_json_auth(
            app.clone(),
            "/api/v1/portfolio/profile",
            &token,
            json!({ "full_name": "Dana K. Scully" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    expect_status(
        put_json_auth(
            app.clone(),
            "/api/v1/portfolio/overview",
            &token,
            json!({ "heading": "About", "summary": "I build things" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    expect_status(
        put_json_auth(
            app.clone(),
            "/api/v1/portfolio/contact",
            &token,
            json!({ "email": "dana@example.com",
                    "socials": { "github": "https://github.com/dana" } }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    for (title, order) in [("Second", 2), ("First", 1)] {
        expect_status(
            post_json_auth(
                app.clone(),
                "/api/v1/portfolio/cards",
                &token,
                json!({ "title": title, "sort_order": order }),
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
    }
    expect_status(
        post_json_auth(
            app.clone(),
            "/api/v1/portfolio/buttons",
            &token,
            json!({ "label": "Resume", "url": "https://example.com/cv.pdf", "variant": "secondary" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let page = expect_status(get_auth(app, "/api/v1/portfolio", &token).await, StatusCode::OK).await;
    let data = &page["data"];
    assert_eq!(data["profile"]["full_name"], "Dana K. Scully");
    assert!(data["profile"]["headline"].is_null());
    assert_eq!(data["overview"]["heading"], "About");
    assert_eq!(data["contact"]["socials"]["github"], "https://github.com/dana");
    assert_eq!(data["cards"][0]["title"], "First");
    assert_eq!(data["cards"][1]["title"], "Second");
    assert_eq!(data["buttons"][0]["variant"], "secondary");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn section_urls_and_variants_are_validated(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "eve", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &token, "eve").await;

    let cases = [
        ("/api/v1/portfolio/cards", json!({ "title": "X", "link_url": "ftp://x.org" })),
        ("/api/v1/portfolio/buttons", json!({ "label": "X", "url": "not a url" })),
        ("/api/v1/portfolio/buttons", json!({ "label": "X", "url": "https://x.org", "variant": "huge" })),
    ];
    for (uri, body) in cases {
        let response = post_json_auth(app.clone(), uri, &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    let socials = put_json_auth(
        app,
        "/api/v1/portfolio/contact",
        &token,
        json!({ "socials": { "github": "javascript:alert(1)" } }),
    )
    .await;
    assert_eq!(socials.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cards_are_scoped_to_their_owner(pool: PgPool) {
    let (_a, alice) = common::user_with_token(&pool, "alice", ROLE_INTERN).await;
    let (_b, bob) = common::user_with_token(&pool, "bob", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &alice, "alice").await;
    create_portfolio(&app, &bob, "bob-site").await;

    let card = expect_status(
        post_json_auth(app.clone(), "/api/v1/portfolio/cards", &alice, json!({ "title": "Mine" })).await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/v1/portfolio/cards/{}", card["data"]["id"]);

    let hijack = put_json_auth(app.clone(), &uri, &bob, json!({ "title": "Ours" })).await;
    assert_eq!(hijack.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete_auth(app.clone(), &uri, &bob).await.status(), StatusCode::NOT_FOUND);

    let renamed = expect_status(
        put_json_auth(app.clone(), &uri, &alice, json!({ "title": "Renamed" })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(renamed["data"]["title"], "Renamed");
    assert_eq!(delete_auth(app, &uri, &alice).await.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Public page and analytics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unpublished_portfolio_is_not_public(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "fred", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &token, "fred").await;

    let hidden = get(app.clone(), "/api/v1/public/portfolios/fred").await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    let unknown = get(app, "/api/v1/public/portfolios/nobody-here").await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_views_feed_analytics(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "gwen", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &token, "gwen").await;
    publish(&app, &token).await;

    for expected in 1..=3 {
        let page = expect_status(
            get(app.clone(), "/api/v1/public/portfolios/gwen").await,
            StatusCode::OK,
        )
        .await;
        assert_eq!(page["data"]["portfolio"]["total_views"], expected);
    }

    let stats = expect_status(
        get_auth(app.clone(), "/api/v1/portfolio/analytics?days=7", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(stats["data"]["total_views"], 3);
    assert_eq!(stats["data"]["days"], 7);
    let series = stats["data"]["series"].as_array().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series[6]["views"], 3);
    assert!(series[..6].iter().all(|d| d["views"] == 0));

    let clamped = expect_status(
        get_auth(app, "/api/v1/portfolio/analytics?days=5000", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(clamped["data"]["series"].as_array().unwrap().len(), 365);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_portfolio_removes_public_page(pool: PgPool) {
    let (_u, token) = common::user_with_token(&pool, "hal", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    create_portfolio(&app, &token, "hal").await;
    publish(&app, &token).await;

    assert_eq!(
        delete_auth(app.clone(), "/api/v1/portfolio", &token).await.status(),
        StatusCode::NO_CONTENT
    );
    let gone = get(app, "/api/v1/public/portfolios/hal").await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
