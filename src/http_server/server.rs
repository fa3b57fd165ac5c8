//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use axum::middleware::map_response;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::Store;

use super::api_routes::{api_routes, invalid_path_handler, method_fallback};
use super::articles_routes::articles_routes;
use super::comments_routes::comments_routes;
use super::topics_routes::topics_routes;
use super::users_routes::users_routes;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// HTTP server for the news API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an opened store
    pub fn new(config: ServerConfig, store: Store) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, store: Store) -> Router {
        let state = AppState { store };

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let api = Router::new()
            .merge(api_routes())
            .merge(topics_routes(state.clone()))
            .merge(users_routes(state.clone()))
            .merge(articles_routes(state.clone()))
            .merge(comments_routes(state));

        Router::new()
            .nest("/api", api)
            .fallback(invalid_path_handler)
            .layer(map_response(method_fallback))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        // Bind the configured string as-is; hostnames resolve here and any
        // failure surfaces as an io::Error instead of a panic
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
        tracing::info!(%addr, "newswire API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_server_uses_configured_address() {
        let store = Store::open_in_memory().await.expect("open in-memory store");
        let config = ServerConfig {
            port: 8080,
            ..Default::default()
        };
        let server = HttpServer::new(config, store);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_router_builds() {
        let store = Store::open_in_memory().await.expect("open in-memory store");
        let server = HttpServer::new(ServerConfig::default(), store);
        let _router = server.router();
        // If we get here, router construction succeeded
    }

    #[tokio::test]
    async fn test_start_binds_hostname_hosts() {
        let store = Store::open_in_memory().await.expect("open in-memory store");
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..Default::default()
        };
        let server = HttpServer::new(config, store);

        // Still serving when the timeout fires means the bind succeeded
        let outcome = tokio::time::timeout(Duration::from_millis(200), server.start()).await;
        assert!(outcome.is_err());
    }
}
