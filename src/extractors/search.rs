//! Extract the free-text search term from the query string.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

/// First `q` parameter of the query string, or empty. Repeated or malformed
/// parameters never reject the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(first_q(pairs))
    }
}

fn first_q(pairs: Vec<(String, String)>) -> SearchTerm {
    pairs
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| SearchTerm(value))
        .unwrap_or_default()
}
