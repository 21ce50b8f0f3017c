use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    movieshelf_db::health_check(&pool).await.unwrap();

    let columns: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info('movie')")
        .fetch_all(&pool)
        .await
        .unwrap();
    let columns: Vec<&str> = columns.iter().map(|(name,)| name.as_str()).collect();

    assert_eq!(
        columns,
        ["id", "title", "rating", "year", "image", "genre", "description"]
    );
}

/// Re-running migrations against an initialised database is a no-op.
#[sqlx::test(migrations = "./migrations")]
async fn test_migrations_are_idempotent(pool: SqlitePool) {
    movieshelf_db::run_migrations(&pool).await.unwrap();
    movieshelf_db::run_migrations(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

/// `create_pool` creates the database file when it does not exist yet.
#[tokio::test]
async fn test_create_pool_creates_missing_file() {
    let path = std::env::temp_dir().join(format!(
        "movieshelf-bootstrap-{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let url = format!("sqlite://{}", path.display());
    let pool = movieshelf_db::create_pool(&url).await.unwrap();
    movieshelf_db::run_migrations(&pool).await.unwrap();
    movieshelf_db::health_check(&pool).await.unwrap();
    pool.close().await;

    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}
