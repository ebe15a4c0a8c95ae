//! Internship catalogue and the application lifecycle.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_status, get_auth, post_json_auth, put_json_auth};
use launchpad_core::roles::ROLE_INTERN;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_internship(app: &axum::Router, admin: &str, title: &str) -> i64 {
    let json = expect_status(
        post_json_auth(
            app.clone(),
            "/api/v1/internships",
            admin,
            json!({
                "title": title,
                "description": "Work on the backend",
                "duration_weeks": 12,
                "stipend": 1500,
                "skills": ["rust", "sql"]
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn apply(app: &axum::Router, token: &str, internship_id: i64) -> axum::response::Response {
    post_json_auth(
        app.clone(),
        &format!("/api/v1/internships/{internship_id}/apply"),
        token,
        json!({ "cover_letter": "Hire me" }),
    )
    .await
}

async fn set_status(app: &axum::Router, admin: &str, application_id: i64, status: &str) -> axum::response::Response {
    put_json_auth(
        app.clone(),
        &format!("/api/v1/applications/{application_id}/status"),
        admin,
        json!({ "status": status }),
    )
    .await
}

fn id_of(json: &Value) -> i64 {
    json["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn internship_crud_round_trip(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let id = create_internship(&app, &admin, "Backend intern").await;
    let uri = format!("/api/v1/internships/{id}");

    let fetched = expect_status(get_auth(app.clone(), &uri, &admin).await, StatusCode::OK).await;
    assert_eq!(fetched["data"]["status"], "open");
    assert_eq!(fetched["data"]["skills"], json!(["rust", "sql"]));

    let updated = expect_status(
        put_json_auth(app.clone(), &uri, &admin, json!({ "status": "closed" })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["data"]["status"], "closed");
    assert_eq!(updated["data"]["title"], "Backend intern");

    let listed = expect_status(
        get_auth(app.clone(), "/api/v1/internships?status=closed", &admin).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    assert_eq!(delete_auth(app.clone(), &uri, &admin).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get_auth(app, &uri, &admin).await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn internship_validation_errors(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let bad_duration = post_json_auth(
        app.clone(),
        "/api/v1/internships",
        &admin,
        json!({ "title": "X", "duration_weeks": 0 }),
    )
    .await;
    assert_eq!(bad_duration.status(), StatusCode::BAD_REQUEST);

    let bad_status = post_json_auth(
        app.clone(),
        "/api/v1/internships",
        &admin,
        json!({ "title": "X", "duration_weeks": 4, "status": "paused" }),
    )
    .await;
    assert_eq!(bad_status.status(), StatusCode::BAD_REQUEST);

    let bad_filter = get_auth(app, "/api/v1/internships?status=paused", &admin).await;
    assert_eq!(bad_filter.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn interns_cannot_manage_internships(pool: PgPool) {
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/internships",
        &intern,
        json!({ "title": "Nope", "duration_weeks": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_referenced_internship_conflicts(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);

    let id = create_internship(&app, &admin, "Referenced").await;
    expect_status(apply(&app, &intern, id).await, StatusCode::CREATED).await;

    let response = delete_auth(app, &format!("/api/v1/internships/{id}"), &admin).await;
    let json = expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_application_conflicts(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let id = create_internship(&app, &admin, "Popular").await;

    expect_status(apply(&app, &intern, id).await, StatusCode::CREATED).await;

    let json = expect_status(apply(&app, &intern, id).await, StatusCode::CONFLICT).await;
    assert_eq!(
        json["error"],
        "You already have an open application for this internship"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn one_open_application_per_user(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let first = create_internship(&app, &admin, "First").await;
    let second = create_internship(&app, &admin, "Second").await;

    let a1 = id_of(&expect_status(apply(&app, &intern, first).await, StatusCode::CREATED).await);

    let json = expect_status(apply(&app, &intern, second).await, StatusCode::CONFLICT).await;
    assert_eq!(
        json["error"],
        "You already have an open application to another internship"
    );

    for status in ["accepted", "active"] {
        expect_status(set_status(&app, &admin, a1, status).await, StatusCode::OK).await;
    }
    let json = expect_status(apply(&app, &intern, second).await, StatusCode::CONFLICT).await;
    assert_eq!(json["error"], "You already have an active internship");

    // Finishing the running internship frees the slot.
    expect_status(set_status(&app, &admin, a1, "completed").await, StatusCode::OK).await;
    expect_status(apply(&app, &intern, second).await, StatusCode::CREATED).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn illegal_transition_is_400(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let id = create_internship(&app, &admin, "Strict").await;
    let application = id_of(&expect_status(apply(&app, &intern, id).await, StatusCode::CREATED).await);

    let skip = set_status(&app, &admin, application, "completed").await;
    assert_eq!(skip.status(), StatusCode::BAD_REQUEST);

    let unknown = set_status(&app, &admin, application, "pending").await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    expect_status(set_status(&app, &admin, application, "rejected").await, StatusCode::OK).await;
    let from_terminal = set_status(&app, &admin, application, "accepted").await;
    assert_eq!(from_terminal.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn withdrawn_application_allows_reapplying(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let id = create_internship(&app, &admin, "Second chance").await;

    let first = id_of(&expect_status(apply(&app, &intern, id).await, StatusCode::CREATED).await);
    let withdrawn = expect_status(
        post_json_auth(
            app.clone(),
            &format!("/api/v1/applications/{first}/withdraw"),
            &intern,
            json!({}),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(withdrawn["data"]["status"], "withdrawn");

    expect_status(apply(&app, &intern, id).await, StatusCode::CREATED).await;

    let mine = expect_status(
        get_auth(app, "/api/v1/applications/mine", &intern).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(mine["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_owner_withdraws_and_reads(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_a, alice) = common::user_with_token(&pool, "alice", ROLE_INTERN).await;
    let (_b, bob) = common::user_with_token(&pool, "bob", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let id = create_internship(&app, &admin, "Private").await;
    let application = id_of(&expect_status(apply(&app, &alice, id).await, StatusCode::CREATED).await);

    let read = get_auth(app.clone(), &format!("/api/v1/applications/{application}"), &bob).await;
    assert_eq!(read.status(), StatusCode::NOT_FOUND);

    let withdraw = post_json_auth(
        app.clone(),
        &format!("/api/v1/applications/{application}/withdraw"),
        &bob,
        json!({}),
    )
    .await;
    assert_eq!(withdraw.status(), StatusCode::FORBIDDEN);

    let listed = expect_status(
        get_auth(app, &format!("/api/v1/internships/{id}/applications"), &admin).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(listed["data"][0]["username"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn closed_internship_refuses_applications(pool: PgPool) {
    let admin = common::admin_token(&pool).await;
    let (_u, intern) = common::user_with_token(&pool, "intern", ROLE_INTERN).await;
    let app = common::build_test_app(pool);
    let id = create_internship(&app, &admin, "Closed").await;
    put_json_auth(
        app.clone(),
        &format!("/api/v1/internships/{id}"),
        &admin,
        json!({ "status": "closed" }),
    )
    .await;

    let response = apply(&app, &intern, id).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
