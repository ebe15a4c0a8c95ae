use sqlx::PgPool;

/// Migrations apply cleanly and seed the lookup rows the API relies on.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    launchpad_db::health_check(&pool).await.unwrap();

    let roles: Vec<(String,)> = sqlx::query_as("SELECT name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let roles: Vec<&str> = roles.iter().map(|r| r.0.as_str()).collect();
    assert_eq!(roles, ["admin", "intern"]);

    let themes: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM themes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(themes.0 >= 2, "light and dark themes should be seeded");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, before): (i64, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as("SELECT id, updated_at FROM themes ORDER BY id LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();

    let after: (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE themes SET description = 'touched' WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(after.0 >= before);
}
