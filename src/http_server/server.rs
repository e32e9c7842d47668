//! # HTTP Server
//!
//! Combines the health route and the vehicle REST routes behind request
//! tracing and CORS, and serves them.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::rest_api::RestServer;
use crate::store::VehicleStore;

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the vehicle registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with the given configuration
    pub fn new(config: HttpServerConfig, store: Arc<dyn VehicleStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, store: Arc<dyn VehicleStore>) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(RestServer::new(store).router())
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if config.cors_origins.is_empty() {
            return layer.allow_origin(Any);
        }

        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %s, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        layer.allow_origin(AllowOrigin::list(origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, "vehicle registry listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("vehicle registry stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::store::InMemoryVehicleStore;

    fn memory_store() -> Arc<dyn VehicleStore> {
        Arc::new(InMemoryVehicleStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(9090), memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    async fn allowed_origin(router: Router, origin: &str) -> Option<String> {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_cors_listed_origin_only() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string(), "\n".to_string()],
            ..Default::default()
        };
        let router = HttpServer::new(config, memory_store()).router();

        assert_eq!(
            allowed_origin(router.clone(), "http://localhost:5173").await,
            Some("http://localhost:5173".to_string())
        );
        assert_eq!(allowed_origin(router, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn test_cors_any_origin_when_unconfigured() {
        let router = HttpServer::new(HttpServerConfig::default(), memory_store()).router();

        assert_eq!(
            allowed_origin(router, "http://evil.example").await,
            Some("*".to_string())
        );
    }
}
