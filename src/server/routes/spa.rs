//! SPA Fallback
//!
//! Requests that miss the bundle get the SPA shell so the client router can
//! resolve them (`/login`, `/signup`, ...). Paths whose last segment has an
//! extension are treated as missing files and get a 404 instead.

use axum::{
    extract::State,
    http::Uri,
    response::Html,
};
use std::io::ErrorKind;
use std::sync::Arc;

use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// Fallback for paths with no matching file in the dist directory
pub async fn spa_index(State(state): State<Arc<AppState>>, uri: Uri) -> ServerResult<Html<String>> {
    let path = uri.path();

    if !state.config.assets.spa_fallback || looks_like_file(path) {
        return Err(ServerError::NotFound(path.to_string()));
    }

    let index = state.config.assets.index_path();
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => {
            tracing::debug!(path = %path, "Serving SPA shell");
            Ok(Html(html))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ServerError::MissingIndex(index)),
        Err(e) => Err(e.into()),
    }
}

/// Whether the last path segment carries a file extension.
///
/// Any dot after the first character counts, so a client route ending in a
/// dotted segment such as `/u/john.doe` gets a 404 rather than the shell.
/// Client routes must keep dots out of their last segment.
pub fn looks_like_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.rfind('.').is_some_and(|dot| dot > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_file() {
        assert!(looks_like_file("/payra-ui-1a2b.wasm"));
        assert!(looks_like_file("/assets/logo.png"));
        assert!(!looks_like_file("/login"));
        assert!(!looks_like_file("/signup/"));
        assert!(!looks_like_file("/"));
        assert!(!looks_like_file("/.well-known"));
        assert!(looks_like_file("/u/john.doe"));
        assert!(!looks_like_file("/john.doe/profile"));
    }
}
