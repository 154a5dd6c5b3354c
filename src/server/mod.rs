//! Host Server
//!
//! Serves the built client bundle with history-API fallback, built with Axum.
//!
//! # Endpoints
//!
//! ## Routes
//! - `GET /api/v1/routes` - List the client route table
//! - `GET /api/v1/resolve?path=...` - Resolve a path against the table
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Client
//! - Static files from the dist directory
//! - Any other path - the shell `index.html` (200 for known routes, 404 otherwise)
//!
//! # Example
//!
//! ```rust,ignore
//! use market_state::config::ServerConfig;
//! use market_state::routing::RouteTable;
//! use market_state::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let state = AppState::load(RouteTable::standard(), config.clone()).await?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the server router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);
    let dist_dir = state.config.dist_dir.clone();

    let shared_state = Arc::new(state);

    let api_routes = Router::new()
        .route("/routes", get(routes::catalog::list_routes))
        .route("/resolve", get(routes::catalog::resolve_path));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Files that exist in the bundle win; everything else gets the shell
    let shell = get(routes::shell::serve_shell).with_state(Arc::clone(&shared_state));
    let client = ServeDir::new(dist_dir)
        .append_index_html_on_directories(false)
        .fallback(shell);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .route("/", get(routes::shell::serve_shell))
        .fallback_service(client)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD])
        .allow_origin(allowed)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> ServerResult<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Market State listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Market State shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
    use crate::routing::RouteTable;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html><html><body><div id=\"shell\"></div></body></html>";

    async fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();

        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let state = AppState::load(RouteTable::standard(), config).await.unwrap();
        let router = build_router(state);

        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app().await;
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["routes"], 8);
    }

    #[tokio::test]
    async fn test_known_routes_serve_shell() {
        for path in ["/", "/login", "/dashboard", "/symbol/AAPL", "/settings"] {
            let (app, _dir) = create_test_app().await;
            let (status, body) = get(app, path).await;
            assert_eq!(status, StatusCode::OK, "path {path}");
            assert_eq!(body, SHELL, "path {path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_serves_shell_with_404() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app');");
    }

    #[tokio::test]
    async fn test_list_routes() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/api/v1/routes").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total"], 8);
        assert_eq!(json["routes"][4]["pattern"], "/symbol/:symbol");
        assert_eq!(json["routes"][4]["view"], "symbol_detail");
        assert_eq!(json["routes"][4]["param"], "symbol");
        assert!(json["routes"][0]["param"].is_null());
    }

    #[tokio::test]
    async fn test_resolve_endpoint() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/api/v1/resolve?path=/symbol/AAPL").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["kind"], "matched");
        assert_eq!(json["params"]["symbol"], "AAPL");

        let (app, _dir) = create_test_app().await;
        let (_, body) = get(app, "/api/v1/resolve?path=/nope").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_resolve_requires_path() {
        let (app, _dir) = create_test_app().await;
        let (status, body) = get(app, "/api/v1/resolve").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_shell() {
        let dir = tempdir().unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = AppState::load(RouteTable::standard(), config).await;
        assert!(matches!(result, Err(ServerError::MissingShell(_))));
    }
}
