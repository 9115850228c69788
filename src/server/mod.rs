//! Payra Host Server
//!
//! Serves the compiled front end, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Front end
//! - Any other path is looked up in the dist directory. Misses fall back to
//!   the SPA shell (see [`routes::spa`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use payra::config::Config;
//! use payra::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(AppState::new(Config::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{handler::Handler, routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let assets = ServeDir::new(&shared_state.config.assets.dist_dir)
        .fallback(routes::spa::spa_index.with_state(Arc::clone(&shared_state)));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState) -> ServerResult<()> {
    let addr = state.config.server.addr();
    let assets = state.config.assets.clone();

    if !state.index_present().await {
        tracing::warn!(
            "SPA shell not found at {:?}; build payra-ui with `trunk build` first",
            assets.index_path()
        );
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Payra listening on {}", addr);
    tracing::info!(
        "Serving {:?} (client-route fallback: {})",
        assets.dist_dir,
        assets.spa_fallback
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Payra shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html><html><body>payra-shell</body></html>";

    fn create_test_app(with_index: bool, spa_fallback: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_index {
            std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        }
        std::fs::write(dir.path().join("payra-ui.js"), "export default 1;").unwrap();

        let mut config = Config::default();
        config.assets.dist_dir = dir.path().to_path_buf();
        config.assets.spa_fallback = spa_fallback;

        (build_router(AppState::new(config)), dir)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(true, true);
        assert_eq!(send_get(app, "/health/live").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app(true, true);
        assert_eq!(send_get(app, "/health/ready").await.status(), StatusCode::OK);

        let (app, _dir) = create_test_app(false, true);
        assert_eq!(
            send_get(app, "/health/ready").await.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(false, true);
        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["index_present"], false);
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_serves_shell() {
        let (app, _dir) = create_test_app(true, true);
        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("payra-shell"));
    }

    #[tokio::test]
    async fn test_static_file() {
        let (app, _dir) = create_test_app(true, true);
        let response = send_get(app, "/payra-ui.js").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "export default 1;");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_shell() {
        for path in ["/dashboard", "/login", "/signup", "/no/such/page"] {
            let (app, _dir) = create_test_app(true, true);
            let response = send_get(app, path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert!(body_text(response).await.contains("payra-shell"));
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (app, _dir) = create_test_app(true, true);
        let response = send_get(app, "/missing.css").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_dotted_last_segment_is_not_routed_to_shell() {
        let (app, _dir) = create_test_app(true, true);
        assert_eq!(send_get(app, "/u/john.doe").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fallback_disabled() {
        let (app, _dir) = create_test_app(true, false);
        assert_eq!(send_get(app, "/login").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_shell_is_unavailable() {
        let (app, _dir) = create_test_app(false, true);
        let response = send_get(app, "/signup").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "INDEX_MISSING");
    }
}
