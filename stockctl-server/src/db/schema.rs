//! Schema bootstrap
//!
//! Creates the product → model → receipt chain if it is missing. Every
//! statement is idempotent; there is no versioning.

use sqlx::PgPool;

use super::DbError;

/// Statements executed in order by [`ensure`].
///
/// Foreign keys keep the default `NO ACTION` so deleting a referenced row
/// fails instead of cascading.
const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS product (
        id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        name VARCHAR(50) NOT NULL
    )
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS ix_product_name ON product (name)",
    r#"
    CREATE TABLE IF NOT EXISTS model (
        id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        product_id INTEGER NOT NULL REFERENCES product (id),
        price NUMERIC(12, 2) NOT NULL CHECK (price >= 0)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_model_name ON model (name)",
    "CREATE INDEX IF NOT EXISTS ix_model_product_id ON model (product_id)",
    r#"
    CREATE TABLE IF NOT EXISTS receipt (
        id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        model_id INTEGER NOT NULL REFERENCES model (id),
        receipt_date TIMESTAMPTZ NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity > 0),
        who_accepted VARCHAR(50) NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_receipt_model_id ON receipt (model_id)",
];

/// Advisory lock serializing concurrent bootstraps (several instances or
/// parallel tests starting at once).
const SCHEMA_LOCK_KEY: i64 = 0x5354_4f43_4b;

/// Create all tables and indexes that do not exist yet.
pub async fn ensure(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring inventory schema...");

    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(statements = STATEMENTS.len(), "Inventory schema ready");
    Ok(())
}
