//! PostgreSQL pool shared by the repositories and schema bootstrap

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool size used by `stockctl serve` unless `--max-connections` says otherwise.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/stockctl").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with an explicit connection cap.
///
/// Fails fast if the first connection cannot be established, so a bad
/// `DATABASE_URL` surfaces at startup rather than on the first request.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    tracing::debug!(max_connections, "Connected to PostgreSQL");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;

    // Run with: DATABASE_URL=postgres://... cargo test -p stockctl-server -- --ignored

    fn database_url() -> String {
        std::env::var("DATABASE_URL").expect("DATABASE_URL required")
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let result = create_pool_with_options("postgres://stockctl@127.0.0.1:1/none", 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_sees_inventory_tables() {
        let pool = create_pool(&database_url()).await.expect("pool creation failed");
        schema::ensure(&pool).await.expect("schema bootstrap failed");

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT count(*) FROM information_schema.tables
             WHERE table_name IN ('product', 'model', 'receipt')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");

        assert_eq!(tables, 3);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn small_pool_queues_requests() {
        let pool = create_pool_with_options(&database_url(), 2)
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    sqlx::query_scalar::<_, i32>("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.await.expect("task panicked").expect("query failed");
            assert_eq!(value, i as i32);
        }
    }
}
