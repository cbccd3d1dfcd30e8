//! Database bootstrap: create the target database and the `books` table if missing, and open the pool.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

const BOOKS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    publication_year INTEGER,
    isbn TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const BOOKS_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS books_created_at_idx ON books (created_at DESC)";

/// Open the pool used by all handlers. Connections are acquired per operation.
pub async fn connect(config: &DbConfig) -> Result<PgPool, AppError> {
    let opts = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `books` table and its ordering index. Safe to run on every start.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    // gen_random_uuid() is built in from PostgreSQL 13; older servers need pgcrypto.
    if let Err(e) = sqlx::query("CREATE EXTENSION IF NOT EXISTS pgcrypto")
        .execute(pool)
        .await
    {
        tracing::warn!(error = %e, "could not create pgcrypto extension");
    }
    sqlx::query(BOOKS_DDL).execute(pool).await?;
    sqlx::query(BOOKS_CREATED_AT_INDEX).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if it does not exist.
pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
    let opts = config.connect_options()?;
    let db_name = opts.get_database().unwrap_or("").to_string();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let admin: PgConnectOptions = opts.database("postgres");
    let mut conn = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
