//! Process configuration: database connection and HTTP server settings from the environment.

mod loader;
mod types;

pub use loader::{load_from_env, load_with};
pub use types::{AppConfig, DbConfig, ServerConfig};
