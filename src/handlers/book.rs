//! Book handlers: list, search, create, update, delete.

use crate::error::AppError;
use crate::extractors::{BookId, JsonPayload, SearchTerm};
use crate::model::BookPayload;
use crate::response;
use crate::service::{BookService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = BookService::list(&state.pool).await?;
    Ok(response::ok(rows))
}

pub async fn search(
    State(state): State<AppState>,
    SearchTerm(q): SearchTerm,
) -> Result<impl IntoResponse, AppError> {
    let rows = BookService::search(&state.pool, &q).await?;
    Ok(response::ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<BookPayload>,
) -> Result<impl IntoResponse, AppError> {
    let book = RequestValidator::validate(body)?;
    let row = BookService::create(&state.pool, &book).await?;
    tracing::info!(id = %row.id, "book created");
    Ok(response::created(row))
}

pub async fn update(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonPayload(body): JsonPayload<BookPayload>,
) -> Result<impl IntoResponse, AppError> {
    let book = RequestValidator::validate(body)?;
    let row = BookService::update(&state.pool, id, &book)
        .await?
        .ok_or_else(AppError::book_not_found)?;
    Ok(response::ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<impl IntoResponse, AppError> {
    let removed = BookService::delete(&state.pool, id).await?;
    if removed == 0 {
        return Err(AppError::book_not_found());
    }
    tracing::info!(%id, "book deleted");
    Ok(response::message("Book deleted successfully"))
}
