//! Book catalog server: loads config from the environment, bootstraps the `books` table, serves `/api`.

use book_catalog::{app, connect, ensure_books_table, ensure_database_exists, load_from_env, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_catalog=info,tower_http=info")),
        )
        .init();

    let config = load_from_env()?;
    ensure_database_exists(&config.db).await?;
    let pool = connect(&config.db).await?;
    ensure_books_table(&pool).await?;

    let state = AppState::new(pool);
    let router = app(state, config.server.request_timeout());

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
