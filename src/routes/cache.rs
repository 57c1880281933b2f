//! Response caching for the export endpoint.
//!
//! Generated CSV bodies are cached by request parameters with a TTL; the
//! panel endpoints read from the in-memory store and need no caching. The
//! `X-Cache` header reports hit/miss so operators can see what a request
//! cost.

use axum::{
    http::{HeaderValue, header},
    response::Response,
};
use std::sync::Arc;

use crate::common::AppState;
use crate::error::{AppError, AppResult};

/// Build a cache key from a prefix and components.
///
/// Components are joined with `:` separator. Empty components are included
/// to ensure different queries produce different keys.
#[must_use]
pub fn cache_key(prefix: &str, components: &[&str]) -> String {
    let mut key = prefix.to_string();
    for c in components {
        key.push(':');
        key.push_str(c);
    }
    key
}

/// Look up a cached body. TTL expiry is the only invalidation: export data
/// only moves as fast as the pollers do.
pub async fn get_cached(state: &AppState, cache_key: &str) -> Option<Arc<Vec<u8>>> {
    let cached = state.response_cache.get(cache_key).await?;
    tracing::debug!(cache_key = %cache_key, "cache_hit");
    Some(cached)
}

/// Store a generated body for later requests.
pub async fn store_cached(state: &AppState, cache_key: String, data: Vec<u8>) {
    let size = data.len();
    state
        .response_cache
        .insert(cache_key.clone(), Arc::new(data))
        .await;
    tracing::debug!(cache_key = %cache_key, size_bytes = size, "cache_stored");
}

/// Build a CSV download response with an `X-Cache` hit/miss header.
pub fn csv_response(data: Vec<u8>, filename: &str, cache_hit: bool) -> AppResult<Response> {
    let cache_header = if cache_hit { "HIT" } else { "MISS" };
    Response::builder()
        .header(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .header("X-Cache", HeaderValue::from_static(cache_header))
        .body(axum::body::Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}
