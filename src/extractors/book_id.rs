//! Extract the book identifier from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Book id from the last path segment. A segment that is not a UUID cannot name a
/// stored book and is rejected as not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse(&raw)
    }
}

fn parse(raw: &str) -> Result<BookId, AppError> {
    Uuid::parse_str(raw.trim())
        .map(BookId)
        .map_err(|_| AppError::book_not_found())
}
