//! Book CRUD against PostgreSQL. Each operation holds one pooled connection for a single statement.

use crate::error::AppError;
use crate::model::{Book, NewBook};
use crate::sql;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

pub struct BookService;

impl BookService {
    /// All books, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, AppError> {
        let sql = sql::select_all();
        tracing::debug!(sql = %sql, "query");
        let mut conn = Self::acquire(pool).await?;
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Books whose title or author contains `q`, ignoring case. Empty `q` matches all.
    pub async fn search(pool: &PgPool, q: &str) -> Result<Vec<Book>, AppError> {
        let sql = sql::select_matching();
        let pattern = sql::contains_pattern(q);
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        let mut conn = Self::acquire(pool).await?;
        let rows = sqlx::query_as::<_, Book>(&sql)
            .bind(&pattern)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Insert one book; the store assigns id and timestamps. Returns the created row.
    pub async fn create(pool: &PgPool, book: &NewBook) -> Result<Book, AppError> {
        let sql = sql::insert();
        tracing::debug!(sql = %sql, title = %book.title, "query");
        let mut conn = Self::acquire(pool).await?;
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.description)
            .bind(book.publication_year)
            .bind(&book.isbn)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Overwrite every mutable field of one book and refresh `updated_at`.
    /// Returns `None` if no row has this id.
    pub async fn update(pool: &PgPool, id: Uuid, book: &NewBook) -> Result<Option<Book>, AppError> {
        let sql = sql::update();
        tracing::debug!(sql = %sql, %id, "query");
        let mut conn = Self::acquire(pool).await?;
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.description)
            .bind(book.publication_year)
            .bind(&book.isbn)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Delete one book by id. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, AppError> {
        let sql = sql::delete();
        tracing::debug!(sql = %sql, %id, "query");
        let mut conn = Self::acquire(pool).await?;
        let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    async fn acquire(pool: &PgPool) -> Result<PoolConnection<Postgres>, AppError> {
        Ok(pool.acquire().await?)
    }
}
