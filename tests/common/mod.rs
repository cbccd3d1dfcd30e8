#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use book_catalog::{app, AppState, DbConfig};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

/// Full application router, with the same middleware stack `main.rs` installs.
pub fn build_test_app(pool: PgPool) -> Router {
    app(AppState::new(pool), Duration::from_secs(30))
}

/// Router over a pool whose server never answers: nothing listens on port 1, so
/// every acquire times out after 200ms. Requests that fail before the store, or
/// never touch it, run without a database.
pub fn build_offline_app() -> Router {
    build_offline_app_with_timeout(Duration::from_secs(30))
}

pub fn build_offline_app_with_timeout(request_timeout: Duration) -> Router {
    let config = DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DbConfig::default()
    };
    let opts = config.connect_options().expect("offline connect options");
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy_with(opts);
    app(AppState::new(pool), request_timeout)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
