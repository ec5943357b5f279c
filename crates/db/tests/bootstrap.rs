use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    wikistack_db::health_check(&pool).await.unwrap();

    for table in ["users", "pages"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The status enum carries exactly the labels the application knows about.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_enum_labels(pool: PgPool) {
    let labels: Vec<(String,)> = sqlx::query_as(
        "SELECT e.enumlabel::TEXT
         FROM pg_enum e
         JOIN pg_type t ON t.oid = e.enumtypid
         WHERE t.typname = 'enum_pages_status'
         ORDER BY e.enumsortorder",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let labels: Vec<&str> = labels.iter().map(|(l,)| l.as_str()).collect();
    assert_eq!(labels, wikistack_core::page::VALID_STATUSES);
}
