//! Task visibility, submissions, review, and feedback.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_status, get_auth, post_json_auth, put_json_auth};
use launchpad_core::roles::ROLE_INTERN;
use serde_json::json;
use sqlx::PgPool;

struct Fixture {
    app: axum::Router,
    admin: String,
    member: String,
    member_id: i64,
    outsider: String,
    internship_id: i64,
}

/// One internship with an accepted member and an outsider who never applied.
async fn fixture(pool: PgPool) -> Fixture {
    let admin = common::admin_token(&pool).await;
    let (member_user, member) = common::user_with_token(&pool, "member", ROLE_INTERN).await;
    let (_o, outsider) = common::user_with_token(&pool, "outsider", ROLE_INTERN).await;
    let app = common::build_test_app(pool);

    let internship = expect_status(
        post_json_auth(
            app.clone(),
            "/api/v1/internships",
            &admin,
            json!({ "title": "Platform", "duration_weeks": 8 }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let internship_id = internship["data"]["id"].as_i64().unwrap();

    let application = expect_status(
        post_json_auth(
            app.clone(),
            &format!("/api/v1/internships/{internship_id}/apply"),
            &member,
            json!({}),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let application_id = application["data"]["id"].as_i64().unwrap();
    expect_status(
        put_json_auth(
            app.clone(),
            &format!("/api/v1/applications/{application_id}/status"),
            &admin,
            json!({ "status": "accepted" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    Fixture {
        app,
        admin,
        member,
        member_id: member_user.id,
        outsider,
        internship_id,
    }
}

async fn create_task(f: &Fixture, body: serde_json::Value) -> i64 {
    let json = expect_status(
        post_json_auth(
            f.app.clone(),
            &format!("/api/v1/internships/{}/tasks", f.internship_id),
            &f.admin,
            body,
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    json["data"]["id"].as_i64().unwrap()
}

async fn submit(f: &Fixture, token: &str, task_id: i64) -> axum::response::Response {
    post_json_auth(
        f.app.clone(),
        &format!("/api/v1/tasks/{task_id}/submissions"),
        token,
        json!({ "content": "Done", "link_url": "https://github.com/me/pr/1" }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn participants_see_unassigned_and_own_tasks(pool: PgPool) {
    let f = fixture(pool).await;
    let shared = create_task(&f, json!({ "title": "Read the docs" })).await;
    let own = create_task(&f, json!({ "title": "Fix bug", "assigned_to": f.member_id })).await;

    let mine = expect_status(
        get_auth(f.app.clone(), "/api/v1/tasks/mine", &f.member).await,
        StatusCode::OK,
    )
    .await;
    let ids: Vec<i64> = mine["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&shared) && ids.contains(&own));

    let outsider_mine = expect_status(
        get_auth(f.app.clone(), "/api/v1/tasks/mine", &f.outsider).await,
        StatusCode::OK,
    )
    .await;
    assert!(outsider_mine["data"].as_array().unwrap().is_empty());

    let hidden = get_auth(f.app.clone(), &format!("/api/v1/tasks/{shared}"), &f.outsider).await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    let listing = get_auth(
        f.app.clone(),
        &format!("/api/v1/internships/{}/tasks", f.internship_id),
        &f.outsider,
    )
    .await;
    assert_eq!(listing.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_update_and_delete(pool: PgPool) {
    let f = fixture(pool).await;
    let id = create_task(&f, json!({ "title": "Draft" })).await;
    let uri = format!("/api/v1/tasks/{id}");

    let updated = expect_status(
        put_json_auth(f.app.clone(), &uri, &f.admin, json!({ "title": "Final" })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["data"]["title"], "Final");

    let bad_assignee =
        put_json_auth(f.app.clone(), &uri, &f.admin, json!({ "assigned_to": 999_999 })).await;
    assert_eq!(bad_assignee.status(), StatusCode::BAD_REQUEST);

    assert_eq!(
        delete_auth(f.app.clone(), &uri, &f.admin).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        get_auth(f.app.clone(), &uri, &f.admin).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn task_can_be_unassigned_and_undated(pool: PgPool) {
    let other = common::create_user(&pool, "other", ROLE_INTERN).await;
    let f = fixture(pool).await;
    let id = create_task(
        &f,
        json!({
            "title": "Pair review",
            "assigned_to": other.id,
            "due_at": "2030-01-01T00:00:00Z"
        }),
    )
    .await;
    let uri = format!("/api/v1/tasks/{id}");

    let hidden = get_auth(f.app.clone(), &uri, &f.member).await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    // Fields missing from the patch are left alone.
    let renamed = expect_status(
        put_json_auth(f.app.clone(), &uri, &f.admin, json!({ "title": "Team review" })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(renamed["data"]["assigned_to"], other.id);
    assert!(!renamed["data"]["due_at"].is_null());

    let cleared = expect_status(
        put_json_auth(
            f.app.clone(),
            &uri,
            &f.admin,
            json!({ "assigned_to": null, "due_at": null }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert!(cleared["data"]["assigned_to"].is_null());
    assert!(cleared["data"]["due_at"].is_null());

    // Unassigned again, so every participant sees it.
    let visible = expect_status(get_auth(f.app.clone(), &uri, &f.member).await, StatusCode::OK).await;
    assert_eq!(visible["data"]["title"], "Team review");
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_requires_visibility(pool: PgPool) {
    let f = fixture(pool).await;
    let task = create_task(&f, json!({ "title": "Shared" })).await;

    let response = submit(&f, &f.outsider, task).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn second_pending_submission_conflicts(pool: PgPool) {
    let f = fixture(pool).await;
    let task = create_task(&f, json!({ "title": "Shared" })).await;

    expect_status(submit(&f, &f.member, task).await, StatusCode::CREATED).await;
    let json = expect_status(submit(&f, &f.member, task).await, StatusCode::CONFLICT).await;
    assert_eq!(json["error"], "You already have a pending submission for this task");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_submission_is_rejected(pool: PgPool) {
    let f = fixture(pool).await;
    let task = create_task(&f, json!({ "title": "Shared" })).await;

    let response = post_json_auth(
        f.app.clone(),
        &format!("/api/v1/tasks/{task}/submissions"),
        &f.member,
        json!({ "content": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn review_with_comment_then_second_review_conflicts(pool: PgPool) {
    let f = fixture(pool).await;
    let task = create_task(&f, json!({ "title": "Shared" })).await;
    let submission = expect_status(submit(&f, &f.member, task).await, StatusCode::CREATED).await;
    let id = submission["data"]["id"].as_i64().unwrap();
    let review_uri = format!("/api/v1/submissions/{id}/review");

    let by_member = post_json_auth(
        f.app.clone(),
        &review_uri,
        &f.member,
        json!({ "decision": "approved" }),
    )
    .await;
    assert_eq!(by_member.status(), StatusCode::FORBIDDEN);

    let reviewed = expect_status(
        post_json_auth(
            f.app.clone(),
            &review_uri,
            &f.admin,
            json!({ "decision": "approved", "comment": "Nice work", "rating": 5 }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(reviewed["data"]["submission"]["status"], "approved");
    assert_eq!(reviewed["data"]["feedback"]["message"], "Nice work");

    let again = post_json_auth(
        f.app.clone(),
        &review_uri,
        &f.admin,
        json!({ "decision": "rejected" }),
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    // Approved work frees the slot for a new pending submission.
    expect_status(submit(&f, &f.member, task).await, StatusCode::CREATED).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn feedback_visible_to_owner_only(pool: PgPool) {
    let f = fixture(pool).await;
    let task = create_task(&f, json!({ "title": "Shared" })).await;
    let submission = expect_status(submit(&f, &f.member, task).await, StatusCode::CREATED).await;
    let uri = format!(
        "/api/v1/submissions/{}/feedback",
        submission["data"]["id"].as_i64().unwrap()
    );

    let bad_rating = post_json_auth(
        f.app.clone(),
        &uri,
        &f.admin,
        json!({ "message": "Hmm", "rating": 9 }),
    )
    .await;
    assert_eq!(bad_rating.status(), StatusCode::BAD_REQUEST);

    expect_status(
        post_json_auth(
            f.app.clone(),
            &uri,
            &f.admin,
            json!({ "message": "Add tests", "rating": 3 }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let listed = expect_status(get_auth(f.app.clone(), &uri, &f.member).await, StatusCode::OK).await;
    assert_eq!(listed["data"][0]["message"], "Add tests");

    let other = get_auth(f.app.clone(), &uri, &f.outsider).await;
    assert_eq!(other.status(), StatusCode::NOT_FOUND);
}
