//! Book CRUD routes.

use crate::handlers::book::{create, delete as delete_handler, list, search, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list).post(create))
        .route("/books/search", get(search))
        .route("/books/:id", put(update).delete(delete_handler))
        .with_state(state)
}
