use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};
use crate::{Error, Result};

/// Environment variable consulted when no port argument is given
pub const PORT_ENV_VAR: &str = "LAZY_DIJKSTRA_PORT";

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Largest graph `/api/graphs/generate` will build
    pub max_generated_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            max_generated_nodes: 100_000,
        }
    }
}

impl ServerConfig {
    /// Port from the first argument, else from `LAZY_DIJKSTRA_PORT`, else the default
    pub fn from_sources<I>(mut args: I, env_port: Option<String>) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(raw) = args.next().or(env_port) {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| Error::InvalidRequest(format!("invalid port: {}", raw)))?;
        }
        Ok(config)
    }

    /// Reads the process arguments (program name skipped) and environment
    pub fn from_env() -> Result<Self> {
        Self::from_sources(std::env::args().skip(1), std::env::var(PORT_ENV_VAR).ok())
    }
}

/// Builds the application with middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::new(config.max_sessions, config.max_generated_nodes));

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server
pub async fn start_server(
    config: ServerConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("shortest path server listening on http://{}", addr);
    info!("health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
