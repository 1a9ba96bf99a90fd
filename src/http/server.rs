//! Axum HTTP server implementation

use crate::core::SaveStore;
use crate::http::handlers::{admin, game, rawsave, status, AppState};
use axum::{
    http::Method,
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Save/load endpoints
        .route("/api/game/save", post(game::save_game))
        .route("/api/game/load", get(game::load_game))
        // Raw save file access
        .route("/api/game/rawsave", get(rawsave::get_rawsave))
        .route("/api/game/rawsave", put(rawsave::put_rawsave))
        .route("/api/game/rawsave", delete(rawsave::delete_rawsave))
        // Save directory inspection
        .route("/api/game/list", get(admin::list_keys))
        .route("/api/game/files", get(admin::list_files))
        .route("/api/game/disk-info", get(admin::disk_info))
        // Health check
        .route("/api/ping", get(status::ping))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers(Any)
                    .allow_origin(Any),
            ),
        )
        .with_state(state)
}

/// Savebox HTTP server
pub struct SaveServer {
    store: Arc<SaveStore>,
    addr: SocketAddr,
}

impl SaveServer {
    /// Create a new server instance
    pub fn new(store: Arc<SaveStore>, host: &str, port: u16) -> Result<Self, String> {
        let addr = Self::parse_address(host, port)?;
        Ok(Self { store, addr })
    }

    /// Parse and normalize host:port into a SocketAddr
    fn parse_address(host: &str, port: u16) -> Result<SocketAddr, String> {
        let normalized_host = Self::normalize_host(host);

        // IPv6 addresses need brackets
        let addr_str = if normalized_host.contains(':') {
            format!("[{}]:{}", normalized_host, port)
        } else {
            format!("{}:{}", normalized_host, port)
        };

        addr_str.parse().map_err(|_| {
            format!(
                "Unable to parse address '{}'. Use IP addresses like '127.0.0.1', '0.0.0.0', or '::1'",
                addr_str
            )
        })
    }

    /// Normalize hostnames for SocketAddr compatibility
    fn normalize_host(host: &str) -> String {
        match host {
            "localhost" => "127.0.0.1".to_string(),
            "::1" | "[::1]" => "::1".to_string(),
            "::" | "[::]" => "::".to_string(),
            _ => host.to_string(),
        }
    }

    /// Start the server
    pub async fn serve(self) -> anyhow::Result<()> {
        let app = create_router(AppState::new(self.store));

        info!("Starting savebox HTTP server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let actual_addr = listener.local_addr()?;
        info!("Server bound to {}", actual_addr);

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
