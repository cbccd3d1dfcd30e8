//! Book catalog: a JSON CRUD API over a single PostgreSQL `books` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load_from_env, AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Book, BookPayload, NewBook};
pub use routes::{api_routes, app};
pub use service::BookService;
pub use state::AppState;
pub use store::{connect, ensure_books_table, ensure_database_exists};
